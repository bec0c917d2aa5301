use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use crate::utils::ShortTypeName;
use crate::{Enumeration, EnumerationError};

/// One singleton value of an [`Enumeration`].
///
/// Members only exist inside their type's registry and are handed out as `&'static Member<E>`.
/// There is no public constructor and no `Clone`, so equality is identity: two references
/// compare equal only if they point at the same member.
pub struct Member<E>
{
    ordinal: usize,
    name: &'static str,
    value: E,
}
impl<E> Member<E>
{
    #[inline] #[must_use]
    pub(crate) fn new(ordinal: usize, name: &'static str, value: E) -> Self
    {
        Self { ordinal, name, value }
    }

    #[inline] #[must_use]
    pub fn ordinal(&self) -> usize { self.ordinal }

    #[inline] #[must_use]
    pub fn name(&self) -> &'static str { self.name }

    // The host payload, also reachable via deref
    #[inline] #[must_use]
    pub fn value(&self) -> &E { &self.value }

    #[inline] #[must_use]
    pub fn is(&self, other: &Self) -> bool { std::ptr::eq(self, other) }

    /// The ordinal distance to `other` (`self.ordinal - other.ordinal`), not clamped to -1/0/1
    #[inline] #[must_use]
    pub fn compare_to(&self, other: &Self) -> isize
    {
        self.ordinal as isize - other.ordinal as isize
    }
}
impl<E: Enumeration> Member<E>
{
    /// [`Self::compare_to`] against a member of any enumeration.
    /// Fails if `other` belongs to a different enumeration type
    pub fn try_compare_to(&self, other: &dyn AnyMember) -> Result<isize, EnumerationError>
    {
        if other.enumeration_id() != TypeId::of::<E>()
        {
            return Err(EnumerationError::TypeMismatch
            {
                enumeration: E::short_type_name(),
                name: self.name,
                other_enumeration: other.enumeration_name(),
                other_name: other.name(),
            });
        }

        Ok(self.ordinal as isize - other.ordinal() as isize)
    }

    /// Members are never duplicated; this always fails
    pub fn try_clone(&self) -> Result<Self, EnumerationError>
    {
        let err = EnumerationError::Clone { enumeration: E::short_type_name(), name: self.name };
        log::warn!("{err}");
        Err(err)
    }
}

// type-erased view of a member, for comparing across enumerations
pub trait AnyMember
{
    fn ordinal(&self) -> usize;
    fn name(&self) -> &'static str;
    fn enumeration_id(&self) -> TypeId;
    fn enumeration_name(&self) -> &'static str;
}
impl<E: Enumeration> AnyMember for Member<E>
{
    fn ordinal(&self) -> usize { self.ordinal }
    fn name(&self) -> &'static str { self.name }
    fn enumeration_id(&self) -> TypeId { TypeId::of::<E>() }
    fn enumeration_name(&self) -> &'static str { E::short_type_name() }
}

impl<E> Deref for Member<E>
{
    type Target = E;
    fn deref(&self) -> &Self::Target { &self.value }
}

impl<E> PartialEq for Member<E>
{
    fn eq(&self, other: &Self) -> bool { self.is(other) }
}
impl<E> Eq for Member<E> { }
impl<E> PartialOrd for Member<E>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl<E> Ord for Member<E>
{
    fn cmp(&self, other: &Self) -> Ordering { self.ordinal.cmp(&other.ordinal) }
}
impl<E> Hash for Member<E>
{
    fn hash<H: Hasher>(&self, state: &mut H) { self.ordinal.hash(state) }
}

impl<E> Display for Member<E>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(self.name) }
}
impl<E: Debug> Debug for Member<E>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct(E::short_type_name())
            .field("ordinal", &self.ordinal)
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<E: Enumeration> serde::Serialize for Member<E>
{
    fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    {
        let err = EnumerationError::Serialize { enumeration: E::short_type_name(), name: self.name };
        log::warn!("{err}");
        Err(serde::ser::Error::custom(err))
    }
}
#[cfg(feature = "serde")]
impl<'de, E: Enumeration> serde::Deserialize<'de> for Member<E>
{
    // the payload is never inspected
    fn deserialize<D: serde::Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error>
    {
        let err = EnumerationError::Deserialize { enumeration: E::short_type_name() };
        log::warn!("{err}");
        Err(serde::de::Error::custom(err))
    }
}
