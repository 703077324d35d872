//! Declarative rules deciding which Go constructs introduce a translation identifier.
//!
//! Adding a recognized call site is a data change: append a [`CallRule`] to
//! [`CALL_RULES`] or a name to [`ERROR_CONSTANTS`].

/// A function whose argument at `arg_index` is a translation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRule {
    /// Terminal callee name. `T`, `c.T` and `utils.T` all resolve to `T`.
    pub function: &'static str,
    pub arg_index: usize,
}

pub const CALL_RULES: &[CallRule] = &[
    CallRule {
        function: "T",
        arg_index: 0,
    },
    CallRule {
        function: "translateFunc",
        arg_index: 0,
    },
    CallRule {
        function: "userLocale",
        arg_index: 0,
    },
    CallRule {
        function: "localT",
        arg_index: 0,
    },
    CallRule {
        function: "newAppError",
        arg_index: 0,
    },
    CallRule {
        function: "NewAppError",
        arg_index: 1,
    },
    CallRule {
        function: "TranslateAsHtml",
        arg_index: 1,
    },
];

/// Error-code constants whose initializer is a translation identifier.
pub const ERROR_CONSTANTS: &[&str] = &[
    "MISSING_CHANNEL_ERROR",
    "MISSING_CHANNEL_MEMBER_ERROR",
    "CHANNEL_EXISTS_ERROR",
    "MISSING_STATUS_ERROR",
    "TEAM_MEMBER_EXISTS_ERROR",
    "MISSING_AUTH_ACCOUNT_ERROR",
    "MISSING_ACCOUNT_ERROR",
    "EXPIRED_LICENSE_ERROR",
    "INVALID_LICENSE_ERROR",
];

/// A call or constant argument as seen by the matcher.
///
/// The scanner lowers syntax nodes into this shape so matching stays
/// independent of the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    /// A string literal, still wrapped in its `"` or `` ` `` delimiters.
    StringLiteral(&'a str),
    /// Anything else: identifiers, concatenations, calls, numbers.
    Computed,
}

/// Find the rule registered for a callee's terminal name.
pub fn call_rule(function: &str) -> Option<&'static CallRule> {
    CALL_RULES.iter().find(|rule| rule.function == function)
}

pub fn is_error_constant(name: &str) -> bool {
    ERROR_CONSTANTS.contains(&name)
}

/// Extract the identifier introduced by a call to `function` with `args`.
pub fn match_call(function: &str, args: &[Argument<'_>]) -> Option<String> {
    let rule = call_rule(function)?;
    literal_value(args.get(rule.arg_index)?)
}

/// Extract the identifier introduced by `const name = value`.
pub fn match_constant(name: &str, value: &Argument<'_>) -> Option<String> {
    if !is_error_constant(name) {
        return None;
    }
    literal_value(value)
}

fn literal_value(arg: &Argument<'_>) -> Option<String> {
    match arg {
        Argument::StringLiteral(raw) => Some(strip_quotes(raw).to_string()),
        Argument::Computed => None,
    }
}

/// Strip the delimiters of a Go string literal.
///
/// Escape sequences are kept verbatim.
pub fn strip_quotes(raw: &str) -> &str {
    for quote in ['"', '`'] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}
