use crate::Capability;

use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn test_capability_names_are_unique() {
    let names: HashSet<&str> = Capability::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names.len(), Capability::ALL.len());
}

#[test]
fn test_capability_from_name() {
    assert_eq!(
        Capability::from_name("canCreateInvoice"),
        Some(Capability::CreateInvoice)
    );
    assert_eq!(
        Capability::from_name("canManageGST"),
        Some(Capability::ManageGst)
    );
    assert_eq!(Capability::from_name("isWorkforce"), Some(Capability::IsWorkforce));
    assert_eq!(Capability::from_name("canManageGst"), None);
    assert_eq!(Capability::from_name(""), None);
}

#[test]
fn test_capability_index_matches_all_order() {
    for (i, capability) in Capability::ALL.iter().enumerate() {
        assert_eq!(capability.index(), i);
    }
}

#[test]
fn test_capability_from_str_rejects_unknown() {
    assert_eq!(
        Capability::from_str("canViewDashboard").unwrap(),
        Capability::ViewDashboard
    );

    let err = Capability::from_str("canFly").unwrap_err();
    assert!(err.to_string().contains("canFly"));
}

#[test]
fn test_capability_serializes_as_wire_name() {
    assert_eq!(
        serde_json::to_string(&Capability::ManageGst).unwrap(),
        "\"canManageGST\""
    );
    assert_eq!(
        serde_json::to_string(&Capability::IsAdmin).unwrap(),
        "\"isAdmin\""
    );
}
