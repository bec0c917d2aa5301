use std::cell::Cell;
use std::sync::OnceLock;
use indexmap::IndexMap;
use parking_lot::ReentrantMutex;
use crate::utils::ShortTypeName;
use crate::{Enumeration, EnumerationError, InvalidArgumentError, LookupError, Member};

pub type Members<E> = IndexMap<&'static str, Member<E>>;

/// The per-type store behind an [`Enumeration`]. Declared as a `static` by the enumeration
/// (see [`crate::enumeration!`]) and filled exactly once by [`Registry::initialize`].
///
/// Until then every read fails with [`EnumerationError::NotInitialized`]; afterwards the
/// member set is frozen and reads take no locks. Any other `Registry<E>` refuses to
/// initialize or be read with [`EnumerationError::ForeignRegistry`].
pub struct Registry<E>
{
    members: OnceLock<Members<E>>,
    // held for the duration of a declaration pass, flag is set while E::declare runs
    init_gate: ReentrantMutex<Cell<bool>>,
}
impl<E> Registry<E>
{
    #[must_use]
    pub const fn new() -> Self
    {
        Self
        {
            members: OnceLock::new(),
            init_gate: ReentrantMutex::new(Cell::new(false)),
        }
    }

    #[inline] #[must_use]
    pub fn is_initialized(&self) -> bool { self.members.get().is_some() }
}
impl<E: Enumeration> Registry<E>
{
    /// Run the declaration pass and freeze the members. No-op once it has succeeded.
    /// A failed pass leaves the registry uninitialized
    pub fn initialize(&self) -> Result<(), EnumerationError>
    {
        self.ensure_canonical()?;
        if self.is_initialized()
        {
            log::trace!("{} is already initialized", E::short_type_name());
            return Ok(());
        }

        let gate = self.init_gate.lock();
        // another thread may have finished while this one waited
        if self.is_initialized() { return Ok(()); }

        if gate.get()
        {
            let err = EnumerationError::ReentrantInitialization { enumeration: E::short_type_name() };
            log::warn!("{err}");
            return Err(err);
        }

        let members =
        {
            let _declaring = DeclaringFlag::set(&gate);
            let mut declaration = Declaration::new();
            E::declare(&mut declaration);
            declaration.finish()
        };
        let members = match members
        {
            Ok(members) => members,
            Err(err) =>
            {
                log::warn!("Failed to initialize {}: {err}", E::short_type_name());
                return Err(err);
            }
        };

        for member in members.values()
        {
            log::trace!("{}::{} = {}", E::short_type_name(), member.name(), member.ordinal());
        }
        log::debug!("Initialized {} with {} members", E::short_type_name(), members.len());

        // only ever set while holding the gate
        let set = self.members.set(members);
        debug_assert!(set.is_ok(), "{} was initialized outside the gate", E::short_type_name());
        Ok(())
    }

    // members only ever come from E::registry(), a second registry would mint duplicates
    fn ensure_canonical(&self) -> Result<(), EnumerationError>
    {
        if std::ptr::eq(self, E::registry()) { return Ok(()); }

        let err = EnumerationError::ForeignRegistry { enumeration: E::short_type_name() };
        log::warn!("{err}");
        Err(err)
    }

    pub fn values(&self) -> Result<&Members<E>, EnumerationError>
    {
        self.ensure_canonical()?;
        self.members.get().ok_or(EnumerationError::NotInitialized { enumeration: E::short_type_name() })
    }

    pub fn value_of(&self, name: &str) -> Result<&Member<E>, LookupError>
    {
        let members = self.values()?;
        members.get(name).ok_or_else(|| InvalidArgumentError
        {
            enumeration: E::short_type_name(),
            name: name.to_owned(),
        }.into())
    }

    #[inline]
    pub fn member(&self, ordinal: usize) -> Result<Option<&Member<E>>, EnumerationError>
    {
        Ok(self.values()?.get_index(ordinal).map(|(_, member)| member))
    }

    /// Read one declared slot by name. Unlike [`Self::value_of`], the name is expected to exist
    pub fn slot(&self, name: &'static str) -> Result<&Member<E>, EnumerationError>
    {
        self.values()?.get(name).ok_or(EnumerationError::UndeclaredSlot { enumeration: E::short_type_name(), name })
    }
}
struct DeclaringFlag<'g>(&'g Cell<bool>);
impl<'g> DeclaringFlag<'g>
{
    fn set(flag: &'g Cell<bool>) -> Self
    {
        flag.set(true);
        Self(flag)
    }
}
impl Drop for DeclaringFlag<'_>
{
    fn drop(&mut self) { self.0.set(false); }
}

/// The ordered list of slots an [`Enumeration`] declares, filled in by
/// [`Enumeration::declare`]. Only the registry can create one, so members can only come into
/// being during initialization.
///
/// Slots receive ordinals in the order they are added. The first invalid slot (empty or
/// repeated name) fails the whole pass.
pub struct Declaration<E>
{
    members: Members<E>,
    error: Option<EnumerationError>,
}
impl<E> Declaration<E>
{
    fn new() -> Self
    {
        Self
        {
            members: IndexMap::new(),
            error: None,
        }
    }

    // The ordinal the next declared slot will receive
    #[inline] #[must_use]
    pub fn next_ordinal(&self) -> usize { self.members.len() }

    pub fn member(&mut self, name: &'static str, value: E) -> &mut Self
    {
        self.member_with(name, |_| value)
    }

    // declare a slot whose payload is built from its ordinal
    pub fn member_with(&mut self, name: &'static str, make_value: impl FnOnce(usize) -> E) -> &mut Self
    {
        if self.error.is_some() { return self; }

        let ordinal = self.next_ordinal();
        if name.is_empty()
        {
            self.error = Some(EnumerationError::EmptyName { enumeration: E::short_type_name(), ordinal });
            return self;
        }
        if self.members.contains_key(name)
        {
            self.error = Some(EnumerationError::DuplicateName { enumeration: E::short_type_name(), name });
            return self;
        }

        self.members.insert(name, Member::new(ordinal, name, make_value(ordinal)));
        self
    }

    fn finish(self) -> Result<Members<E>, EnumerationError>
    {
        if let Some(err) = self.error { return Err(err); }
        if self.members.is_empty()
        {
            return Err(EnumerationError::NoMembers { enumeration: E::short_type_name() });
        }
        Ok(self.members)
    }
}
