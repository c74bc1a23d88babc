//! Fixed reference rows inserted right after each lookup table is created.
//!
//! Ids are part of the contract: other tables store them as foreign keys and
//! clients hard-code them in forms.

pub const USER_TYPES: &[(i32, &str)] = &[(1, "Free"), (2, "Paid")];

pub const BUSINESS_TYPES: &[(i32, &str)] = &[(1, "Non-Profit"), (2, "For-Profit")];

pub const INDUSTRY_TYPES: &[(i32, &str)] = &[(1, "EdTech"), (2, "FinTech")];

pub const STATUSES: &[(i32, &str)] = &[
    (1, "Pending"),
    (2, "Completed"),
    (3, "Rejected"),
    (4, "Active"),
    (5, "Approved"),
    (6, "Non-Active"),
];

pub const EQUITY_TYPES: &[(i32, &str)] = &[
    (1, "Development Capital"),
    (2, "Private Equity"),
    (3, "Venture Capital"),
];

pub const DEBT_TYPES: &[(i32, &str)] = &[
    (1, "Bridge Finance"),
    (2, "Corporate Debt"),
    (3, "Mezzanine"),
];

/// Table name paired with its seed rows, in creation order.
pub const LOOKUP_TABLES: &[(&str, &[(i32, &str)])] = &[
    ("user_types", USER_TYPES),
    ("business_types", BUSINESS_TYPES),
    ("industry_types", INDUSTRY_TYPES),
    ("statuses", STATUSES),
    ("equity_types", EQUITY_TYPES),
    ("debt_types", DEBT_TYPES),
];
