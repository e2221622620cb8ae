//! Per-field directive grammar: `"<name-or-empty>[,<flag>]*"`.

/// Parsed binding directive for one field. A missing directive string is the
/// default directive: bind by field name, required.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directive {
    pub skip: bool,
    pub rename: Option<String>,
    pub optional: bool,
}

impl Directive {
    /// Parses a raw directive string. The first token is the lookup name
    /// (empty keeps the field name, `-` skips the field); remaining tokens
    /// are flags. `omitempty` marks the field optional; unrecognized flags
    /// are ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let mut directive = Self::default();
        let mut parts = raw.split(',');
        match parts.next().unwrap_or("") {
            "-" => {
                directive.skip = true;
                return directive;
            }
            "" => {}
            name => directive.rename = Some(name.to_string()),
        }
        for flag in parts {
            if flag == "omitempty" {
                directive.optional = true;
            }
        }
        directive
    }

    /// The symbol name to look up for a field named `field_name`.
    pub fn lookup_name<'a>(&'a self, field_name: &'a str) -> &'a str {
        self.rename.as_deref().unwrap_or(field_name)
    }
}
