use sigil::{Enumeration, EnumerationError, LookupError, Member, Registry};
use crate::fixtures::{ActionWithPublicConstructor, Anonymous, Dormant, Flag};

#[test]
fn access_before_initialize()
{
    crate::init_logging();
    assert!(!Dormant::is_initialized());
    assert_eq!(Some(EnumerationError::NotInitialized { enumeration: "Dormant" }), Dormant::awake().err());
    assert_eq!(Some(EnumerationError::NotInitialized { enumeration: "Dormant" }), Dormant::values().err());
    assert!(matches!(
        Dormant::value_of("awake"),
        Err(LookupError::Enumeration(EnumerationError::NotInitialized { .. }))));

    Dormant::initialize().unwrap();
    let awake = Dormant::awake().unwrap();
    assert_eq!(1, awake.ordinal());
    assert!(awake.is(Dormant::awake().unwrap()));
}

#[test]
fn anonymous_enumeration_is_rejected()
{
    assert_eq!(Err(EnumerationError::NoMembers { enumeration: "Anonymous" }), Anonymous::initialize());
    // still rejected on retry
    assert_eq!(Err(EnumerationError::NoMembers { enumeration: "Anonymous" }), Anonymous::initialize());
    assert!(!Anonymous::is_initialized());
}

#[test]
fn instantiate_with_public_constructor()
{
    fn assert_enumeration<E: Enumeration>(_: &E) { }

    ActionWithPublicConstructor::initialize().unwrap();
    let loose = ActionWithPublicConstructor::new();
    assert_enumeration(&loose);

    // a plain payload value, never one of the registered members
    let values = ActionWithPublicConstructor::values().unwrap();
    assert!(values.values().all(|member| !std::ptr::eq(member.value(), &loose)));
    assert_eq!(2, values.len());
}

#[test]
fn serialization()
{
    Flag::initialize().unwrap();
    let err = serde_json::to_string(Flag::not_ok().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Flag::notOk cannot be serialized"), "{err}");

    // also when nested inside a serializable host structure
    #[derive(serde::Serialize)]
    struct Snapshot { flag: &'static Member<Flag> }
    let err = serde_json::to_string(&Snapshot { flag: Flag::ok().unwrap() }).unwrap_err();
    assert!(err.to_string().contains("Flag::ok cannot be serialized"), "{err}");
}

#[test]
fn unserialization()
{
    let payloads =
    [
        r#"{"ordinal":2,"name":"notOk","value":{"flag_value":4}}"#,
        r#""notOk""#,
        "2",
    ];
    for payload in payloads
    {
        let err = serde_json::from_str::<Member<Flag>>(payload).unwrap_err();
        assert!(err.to_string().contains("Flag members cannot be deserialized"), "{payload}: {err}");
    }
}

#[test]
fn clone()
{
    Flag::initialize().unwrap();
    let not_ok = Flag::not_ok().unwrap();
    assert_eq!(
        Some(EnumerationError::Clone { enumeration: "Flag", name: "notOk" }),
        not_ok.try_clone().err());
    assert_eq!(4, Flag::count().unwrap());
}

#[test]
fn second_registry_cannot_mint_members()
{
    Flag::initialize().unwrap();
    let second: &'static Registry<Flag> = Box::leak(Box::new(Registry::new()));
    let foreign = EnumerationError::ForeignRegistry { enumeration: "Flag" };

    assert_eq!(Err(foreign.clone()), second.initialize());
    assert!(!second.is_initialized());
    assert_eq!(Some(LookupError::Enumeration(foreign.clone())), second.value_of("notOk").err());
    assert_eq!(Some(foreign), second.slot("notOk").err());

    // the declared registry is untouched and still the only source of notOk
    let not_ok = Flag::value_of("notOk").unwrap();
    assert!(not_ok.is(Flag::not_ok().unwrap()));
    assert_eq!(4, Flag::count().unwrap());
}
