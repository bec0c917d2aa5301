pub trait ShortTypeName
{
    fn short_type_name() -> &'static str;
}
impl<T: ?Sized> ShortTypeName for T
{
    // std::any::type_name with the module path (and generic arguments' paths) left off the outer type
    #[inline]
    fn short_type_name() -> &'static str
    {
        let type_name = std::any::type_name::<T>();
        let path_end = type_name.find('<').unwrap_or(type_name.len());
        match type_name[..path_end].rfind(':')
        {
            None => type_name,
            Some(i) => &type_name[(i + 1)..]
        }
    }
}
