use crate::{Declaration, EnumerationError, LookupError, Member, Members, Registry};

/// A closed set of named singleton values with payload `Self`.
///
/// Implementors provide a `static` [`Registry`] and the ordered list of slots; the
/// [`crate::enumeration!`] macro writes both, plus one accessor per slot. Nothing is created
/// until [`Enumeration::initialize`] is called, and reading members before that fails with
/// [`EnumerationError::NotInitialized`].
pub trait Enumeration: Sized + Send + Sync + 'static
{
    fn registry() -> &'static Registry<Self>;

    // called once, by the registry, while initializing
    fn declare(declaration: &mut Declaration<Self>);

    #[inline]
    fn initialize() -> Result<(), EnumerationError> { Self::registry().initialize() }

    #[inline]
    fn is_initialized() -> bool { Self::registry().is_initialized() }

    /// The member named `name`, by identity
    #[inline]
    fn value_of(name: &str) -> Result<&'static Member<Self>, LookupError> { Self::registry().value_of(name) }

    /// All members keyed by name, in ordinal order. The same map on every call
    #[inline]
    fn values() -> Result<&'static Members<Self>, EnumerationError> { Self::registry().values() }

    #[inline]
    fn member(ordinal: usize) -> Result<Option<&'static Member<Self>>, EnumerationError>
    {
        Self::registry().member(ordinal)
    }

    #[inline]
    fn count() -> Result<usize, EnumerationError> { Ok(Self::values()?.len()) }
}

/// Declare a registry-backed [`Enumeration`] for a payload type.
///
/// Each slot is `accessor [: "name"] => |ordinal| payload`. The member name defaults to the
/// accessor's identifier; ordinals follow the order written here. Every slot gets an
/// associated accessor returning `Result<&'static Member<Self>, EnumerationError>`.
///
/// ```
/// use enum_sigil::{enumeration, Enumeration};
///
/// pub struct Flag { flag_value: u32 }
/// enumeration!
/// {
///     Flag
///     {
///         no_state: "noState" => |ordinal| Flag { flag_value: 1 << ordinal },
///         ok => |ordinal| Flag { flag_value: 1 << ordinal },
///     }
/// }
///
/// Flag::initialize().unwrap();
/// assert_eq!("noState", Flag::no_state().unwrap().name());
/// assert_eq!(2, Flag::ok().unwrap().flag_value);
/// ```
#[macro_export]
macro_rules! enumeration
{
    (
        $ty:ident
        {
            $( $slot:ident $( : $name:literal )? => $make:expr ),* $(,)?
        }
    ) =>
    {
        impl $crate::Enumeration for $ty
        {
            fn registry() -> &'static $crate::Registry<Self>
            {
                static REGISTRY: $crate::Registry<$ty> = $crate::Registry::new();
                &REGISTRY
            }

            #[allow(unused_variables)]
            fn declare(declaration: &mut $crate::Declaration<Self>)
            {
                $( declaration.member_with($crate::__slot_name!($slot $( : $name )?), $make); )*
            }
        }

        #[allow(dead_code)]
        impl $ty
        {
            $(
                pub fn $slot() -> ::core::result::Result<&'static $crate::Member<Self>, $crate::EnumerationError>
                {
                    <Self as $crate::Enumeration>::registry().slot($crate::__slot_name!($slot $( : $name )?))
                }
            )*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __slot_name
{
    ($slot:ident) => { ::core::stringify!($slot) };
    ($slot:ident : $name:literal) => { $name };
}
