//! Literal `{name}` placeholder substitution

use crate::args::TranslationArgs;

/// Replace every `{name}` marker for each argument, in argument order.
///
/// Markers without a matching argument are left untouched. Replacement is a
/// plain substring substitution, so a value containing another argument's
/// marker is substituted again by later arguments.
pub fn substitute(text: &str, args: &TranslationArgs) -> String {
    args.iter().fold(text.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{name}}}"), value)
    })
}
