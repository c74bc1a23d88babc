use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::setup_test_db;
use crate::business_profile::{self, NewBusinessProfile};
use crate::deal::{self, NewDeal};
use crate::errors::ModelError;
use crate::project::{self, NewProject};
use crate::transaction::{self, NewTransaction};
use crate::user;

fn profile_input(name: &str, email: &str) -> NewBusinessProfile {
    NewBusinessProfile {
        name: name.into(),
        country: "Kenya".into(),
        phone_number: "0700000000".into(),
        user_type_id: 1,
        business_type_id: 2,
        heard_about_by: "friend".into(),
        email: email.into(),
        password: "unused".into(),
        website: None,
        business_size: "10-50".into(),
        country_code: "+254".into(),
        office_phone_number: None,
        address_line1: "1 Main St".into(),
        address_line2: String::new(),
        city: "Nairobi".into(),
        post_code: "00100".into(),
        description: Some("lending".into()),
        industry_type_id: 2,
    }
}

fn project_input() -> NewProject {
    NewProject {
        status_id: 1,
        description: "expansion".into(),
        region: "East Africa".into(),
        country: "Kenya".into(),
        industry_type_id: 1,
        funded_by_equity: true,
        equity_type_id: Some(3),
        funded_by_debt: false,
        debt_type_id: Some(2),
        revenue: 1_000,
        ebitda: 0,
    }
}

async fn seeded_profile(db: &DatabaseConnection) -> Result<business_profile::Model> {
    Ok(business_profile::create(db, &profile_input("Acme", "ops@acme.test"), "hash").await?)
}

#[tokio::test]
async fn user_create_and_lookup() -> Result<()> {
    let db = setup_test_db().await?;
    let u = user::create(&db, "Ann", "ann@example.com", "$argon2id$fake").await?;
    assert!(u.id > 0);
    assert!(!u.admin_auth);

    let by_email = user::find_by_email(&db, "ann@example.com").await?;
    assert_eq!(by_email.map(|m| m.id), Some(u.id));
    assert!(user::find_by_email(&db, "nobody@example.com").await?.is_none());
    assert_eq!(user::list(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn duplicate_user_email_is_a_conflict() -> Result<()> {
    let db = setup_test_db().await?;
    user::create(&db, "Ann", "ann@example.com", "h1").await?;
    let err = user::create(&db, "Ann Again", "ann@example.com", "h2").await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    assert_eq!(user::list(&db).await?.len(), 1);
    Ok(())
}

#[test]
fn user_serialization_hides_secrets_and_splits_roles() {
    let m = user::Model {
        id: 1,
        name: "Ann".into(),
        email: "ann@example.com".into(),
        password_hash: "secret-hash".into(),
        grad_year: Some(2020),
        current_work: None,
        admin_auth: false,
        resume: Some(vec![1, 2, 3]),
        resume_public: false,
        roles: Some("mentor, founder,,".into()),
        image_url: None,
        cover_url: None,
        created_at: chrono::Utc::now().into(),
    };
    let json = serde_json::to_value(&m).unwrap();
    assert!(json.get("password_hash").is_none());
    assert!(json.get("resume").is_none());
    assert_eq!(m.rolenames(), vec!["mentor".to_string(), "founder".to_string()]);
}

#[tokio::test]
async fn duplicate_profile_name_is_a_conflict() -> Result<()> {
    let db = setup_test_db().await?;
    seeded_profile(&db).await?;
    let err = business_profile::create(&db, &profile_input("Acme", "other@acme.test"), "hash")
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn profile_name_longer_than_twenty_chars_is_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    let err = business_profile::create(&db, &profile_input("A Very Long Company Name", "x@y.test"), "hash")
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn unknown_lookup_id_violates_foreign_key() -> Result<()> {
    let db = setup_test_db().await?;
    let mut input = profile_input("Ghost", "ghost@acme.test");
    input.industry_type_id = 99;
    let err = business_profile::create(&db, &input, "hash").await.unwrap_err();
    assert!(matches!(err, ModelError::ForeignKey(_)), "got {err:?}");

    let profile = seeded_profile(&db).await?;
    let err = deal::create(&db, profile.id, &NewDeal { name: "Series A".into(), status_id: 42 })
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::ForeignKey(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn project_funding_flags_gate_type_ids() -> Result<()> {
    let db = setup_test_db().await?;
    let profile = seeded_profile(&db).await?;

    let p = project::create(&db, profile.id, &project_input()).await?;
    assert_eq!(p.equity_type_id, Some(3));
    assert_eq!(p.debt_type_id, None);
    assert!(!p.funded_by_debt);

    let stored = project::Entity::find_by_id(p.id).one(&db).await?.ok_or_else(|| anyhow::anyhow!("missing"))?;
    assert_eq!(stored.debt_type_id, None);
    assert_eq!(stored.revenue, 1_000);
    Ok(())
}

#[tokio::test]
async fn profile_children_are_loaded_per_profile() -> Result<()> {
    let db = setup_test_db().await?;
    let acme = seeded_profile(&db).await?;
    let other = business_profile::create(&db, &profile_input("Other", "ops@other.test"), "hash").await?;

    project::create(&db, acme.id, &project_input()).await?;
    deal::create(&db, acme.id, &NewDeal { name: "Seed".into(), status_id: 4 }).await?;
    deal::create(&db, other.id, &NewDeal { name: "Bridge".into(), status_id: 1 }).await?;
    transaction::create(&db, acme.id, &NewTransaction { name: "Wire".into(), status_id: 2 }).await?;

    let loaded = business_profile::find_with_children(&db, acme.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("profile missing"))?;
    assert_eq!(loaded.projects.len(), 1);
    assert_eq!(loaded.deals.len(), 1);
    assert_eq!(loaded.deals[0].name, "Seed");
    assert_eq!(loaded.transactions.len(), 1);

    let json = serde_json::to_value(&loaded)?;
    assert!(json.get("password").is_none());
    assert_eq!(json["address_line_1"], "1 Main St");
    assert_eq!(json["deals"][0]["status_id"], 4);

    assert_eq!(deal::list_for_profile(&db, other.id).await?.len(), 1);
    assert!(business_profile::find_with_children(&db, 999).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn profile_list_filters_by_name_and_pages() -> Result<()> {
    let db = setup_test_db().await?;
    for (i, name) in ["Acme", "Acme Labs", "Zenith"].iter().enumerate() {
        business_profile::create(&db, &profile_input(name, &format!("p{i}@x.test")), "hash").await?;
    }
    assert_eq!(business_profile::list(&db, None, 0, 10).await?.len(), 3);
    assert_eq!(business_profile::list(&db, Some("Acme"), 0, 10).await?.len(), 2);
    let second_page = business_profile::list(&db, None, 2, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Zenith");
    Ok(())
}
