// Member-name rules for #[ordinal_enum(rename_all = "...")]. Variant identifiers are expected to be PascalCase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule
{
    Verbatim,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
    TitleCase,
    LowerCase,
}
impl RenameRule
{
    pub fn parse(rule: &str) -> Option<Self>
    {
        match rule
        {
            "PascalCase" => Some(Self::Verbatim),
            "camelCase" => Some(Self::CamelCase),
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            "Title Case" => Some(Self::TitleCase),
            "lowercase" => Some(Self::LowerCase),
            _ => None,
        }
    }

    pub fn apply(self, ident: &str) -> String
    {
        let words = split_pascal(ident);
        match self
        {
            Self::Verbatim => ident.to_owned(),
            Self::CamelCase =>
            {
                let mut result = String::with_capacity(ident.len());
                for (i, word) in words.iter().enumerate()
                {
                    match i
                    {
                        0 => result.push_str(&word.to_lowercase()),
                        _ => result.push_str(word),
                    }
                }
                result
            }
            Self::SnakeCase => join_mapped(&words, "_", str::to_lowercase),
            Self::ScreamingSnakeCase => join_mapped(&words, "_", str::to_uppercase),
            Self::KebabCase => join_mapped(&words, "-", str::to_lowercase),
            Self::TitleCase => join_mapped(&words, " ", str::to_owned),
            Self::LowerCase => ident.to_lowercase(),
        }
    }
}

// a new word starts at every uppercase char after the first; underscores also split
fn split_pascal(ident: &str) -> Vec<&str>
{
    let mut words = Vec::new();
    for part in ident.split('_').filter(|p| !p.is_empty())
    {
        let mut start = 0;
        for (i, c) in part.char_indices()
        {
            if i > 0 && c.is_uppercase()
            {
                words.push(&part[start..i]);
                start = i;
            }
        }
        words.push(&part[start..]);
    }
    words
}

fn join_mapped(words: &[&str], separator: &str, map: impl Fn(&str) -> String) -> String
{
    let mut out = String::new();
    for (i, word) in words.iter().enumerate()
    {
        if i > 0 { out.push_str(separator); }
        out.push_str(&map(*word));
    }
    out
}

#[cfg(test)]
mod tests
{
    use super::RenameRule;

    #[test]
    fn pascal_conversions()
    {
        assert_eq!("notOk", RenameRule::CamelCase.apply("NotOk"));
        assert_eq!("no_state", RenameRule::SnakeCase.apply("NoState"));
        assert_eq!("NO_STATE", RenameRule::ScreamingSnakeCase.apply("NoState"));
        assert_eq!("not-ok", RenameRule::KebabCase.apply("NotOk"));
        assert_eq!("Not Ok", RenameRule::TitleCase.apply("NotOk"));
        assert_eq!("notok", RenameRule::LowerCase.apply("NotOk"));
        assert_eq!("NotOk", RenameRule::Verbatim.apply("NotOk"));
    }

    #[test]
    fn single_words()
    {
        assert_eq!("view", RenameRule::CamelCase.apply("View"));
        assert_eq!("edit", RenameRule::SnakeCase.apply("Edit"));
    }

    #[test]
    fn unknown_rule()
    {
        assert_eq!(None, RenameRule::parse("Sponge Case"));
        assert_eq!(Some(RenameRule::KebabCase), RenameRule::parse("kebab-case"));
    }
}
