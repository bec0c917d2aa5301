use thiserror::Error;

// Misuse of the singleton contract. Enumerations are named by their short type name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError
{
    /// A member was read before [`crate::Enumeration::initialize`] completed
    #[error("{enumeration} has not been initialized")]
    NotInitialized { enumeration: &'static str },

    #[error("{enumeration} declares no members")]
    NoMembers { enumeration: &'static str },

    #[error("{enumeration} declares a member with an empty name (ordinal {ordinal})")]
    EmptyName { enumeration: &'static str, ordinal: usize },

    #[error("{enumeration}::{name} is declared more than once")]
    DuplicateName { enumeration: &'static str, name: &'static str },

    #[error("{enumeration}::{name} is not a declared member")]
    UndeclaredSlot { enumeration: &'static str, name: &'static str },

    #[error("{enumeration} was initialized again from inside its own declaration")]
    ReentrantInitialization { enumeration: &'static str },

    /// A `Registry<E>` other than the one returned by [`crate::Enumeration::registry`] was used
    #[error("{enumeration} can only be read through its own registry")]
    ForeignRegistry { enumeration: &'static str },

    #[error("{enumeration}::{name} cannot be compared with {other_enumeration}::{other_name}")]
    TypeMismatch
    {
        enumeration: &'static str,
        name: &'static str,
        other_enumeration: &'static str,
        other_name: &'static str,
    },

    #[error("{enumeration}::{name} cannot be cloned")]
    Clone { enumeration: &'static str, name: &'static str },

    #[error("{enumeration}::{name} cannot be serialized")]
    Serialize { enumeration: &'static str, name: &'static str },

    #[error("{enumeration} members cannot be deserialized")]
    Deserialize { enumeration: &'static str },
}

/// A lookup by name that matched nothing. Expected for user-supplied strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{enumeration} has no member named {name:?}")]
pub struct InvalidArgumentError
{
    pub enumeration: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError
{
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn messages_name_the_enumeration()
    {
        let err = EnumerationError::DuplicateName { enumeration: "Flag", name: "ok" };
        assert_eq!("Flag::ok is declared more than once", err.to_string());

        let err = InvalidArgumentError { enumeration: "Flag", name: "nope".to_owned() };
        assert_eq!("Flag has no member named \"nope\"", err.to_string());
    }

    #[test]
    fn lookup_error_keeps_kinds_apart()
    {
        let not_init: LookupError = EnumerationError::NotInitialized { enumeration: "Action" }.into();
        assert!(matches!(not_init, LookupError::Enumeration(EnumerationError::NotInitialized { .. })));
        assert_eq!("Action has not been initialized", not_init.to_string());

        let unknown: LookupError = InvalidArgumentError { enumeration: "Action", name: "delete".to_owned() }.into();
        assert!(matches!(unknown, LookupError::InvalidArgument(_)));
    }
}
