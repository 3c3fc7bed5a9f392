use crate::{Company, Role, UserProfile};

#[test]
fn test_user_profile_from_auth_payload() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"role": "admin", "company_id": "c-42"}"#).unwrap();

    assert_eq!(profile.role, Role::Admin);
    assert_eq!(profile.company_id.as_deref(), Some("c-42"));
}

#[test]
fn test_user_profile_missing_role_is_other() {
    let profile: UserProfile = serde_json::from_str(r#"{"company_id": null}"#).unwrap();

    assert_eq!(profile.role, Role::Other);
    assert!(profile.company_id.is_none());
}

#[test]
fn test_company_builder() {
    let company = Company::new("c-1").with_name("Sharma Traders");

    assert_eq!(company.id, "c-1");
    assert_eq!(company.name.as_deref(), Some("Sharma Traders"));
}
