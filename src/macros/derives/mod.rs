pub mod ordinal_enum;
