use crate::config::Command;

pub const PLACEHOLDER: &str = "%s";

/// Where to send a request for `command` with `argument`.
///
/// The argument is only used if the command has a parameterized url, in which case it is
/// percent-encoded so it can't escape the query component it's substituted into.
pub fn build_url<A: AsRef<[u8]> + ?Sized>(command: &Command, argument: &A) -> String {
    let argument = argument.as_ref();
    if argument.is_empty() || command.url_with_params.is_empty() {
        return command.url.clone();
    }
    command
        .url_with_params
        .replacen(PLACEHOLDER, &urlencoding::encode_binary(argument), 1)
}
