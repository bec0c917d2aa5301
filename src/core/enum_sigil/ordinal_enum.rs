use indexmap::IndexMap;
use crate::utils::ShortTypeName;
use crate::InvalidArgumentError;

/// A fieldless Rust enum used as a closed enumeration. The variants are the members, so there
/// is nothing to initialize and copies are the same value by construction.
///
/// Usually derived with `#[derive(OrdinalEnum)]`, which numbers variants in declaration order
/// (ignoring any explicit discriminants) and names them after their identifiers.
pub trait OrdinalEnum: Copy + 'static
{
    const COUNT: usize;

    fn ordinal(self) -> usize;
    fn name(self) -> &'static str;

    /// Every variant, in ordinal order
    fn values() -> &'static [Self];

    #[inline]
    fn from_ordinal(ordinal: usize) -> Option<Self> { Self::values().get(ordinal).copied() }

    fn value_of(name: &str) -> Result<Self, InvalidArgumentError>
    {
        Self::values().iter()
            .copied()
            .find(|value| value.name() == name)
            .ok_or_else(|| InvalidArgumentError
            {
                enumeration: Self::short_type_name(),
                name: name.to_owned(),
            })
    }

    /// `self.ordinal - other.ordinal`, not clamped to -1/0/1
    #[inline]
    fn compare_to(self, other: Self) -> isize
    {
        self.ordinal() as isize - other.ordinal() as isize
    }

    fn value_map() -> IndexMap<&'static str, Self>
    {
        Self::values().iter().map(|value| (value.name(), *value)).collect()
    }
}
