use sigil::enumeration;

// Fields are private so only this module (and the registry) can build members

pub struct Action { _private: () }
enumeration!
{
    Action
    {
        view => |_| Action { _private: () },
        edit => |_| Action { _private: () },
    }
}

pub struct ActionWithPublicConstructor { _private: () }
impl ActionWithPublicConstructor
{
    pub fn new() -> Self { Self { _private: () } }
}
enumeration!
{
    ActionWithPublicConstructor
    {
        view => |_| ActionWithPublicConstructor::new(),
        edit => |_| ActionWithPublicConstructor::new(),
    }
}

#[derive(Debug)]
pub struct Flag { flag_value: u32 }
impl Flag
{
    fn from_ordinal(ordinal: usize) -> Self { Self { flag_value: 1 << ordinal } }

    pub fn flag_value(&self) -> u32 { self.flag_value }
}
enumeration!
{
    Flag
    {
        no_state: "noState" => Flag::from_ordinal,
        ok => Flag::from_ordinal,
        not_ok: "notOk" => Flag::from_ordinal,
        unavailable => Flag::from_ordinal,
    }
}

// Only initialized by the access-before-init test
pub struct Dormant { _private: () }
enumeration!
{
    Dormant
    {
        asleep => |_| Dormant { _private: () },
        awake => |_| Dormant { _private: () },
    }
}

pub struct Anonymous { _private: () }
enumeration!(Anonymous { });
