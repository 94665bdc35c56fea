//! Parsing of `/proc/[pid]/cmdline` records.
//!
//! The record holds the arguments as NUL-terminated strings. Kernel threads
//! have an empty record. Processes may also rewrite their own argv, e.g.
//! `nginx: master process /usr/sbin/nginx`, in which case everything ends up
//! in the first argument.

/// Returns the first argument of a raw `cmdline` record, i.e. the bytes
/// before the first NUL.
pub fn first_argument(cmdline: &[u8]) -> &[u8] {
    cmdline.split(|&b| b == 0).next().unwrap_or_default()
}

/// Decodes `bytes` as UTF-8, replacing every invalid byte with its own
/// U+FFFD, so a truncated multi-byte sequence yields one replacement per byte.
fn decode_per_byte(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        out.extend(std::iter::repeat_n(
            char::REPLACEMENT_CHARACTER,
            chunk.invalid().len(),
        ));
    }
    out
}

/// Extracts the executable name from a raw `cmdline` record.
///
/// Takes the first argument and returns its first token, splitting on
/// whitespace and `:`. Returns `None` if there is no token, as for kernel
/// threads. Invalid UTF-8 bytes each become U+FFFD.
pub fn executable_token(cmdline: &[u8]) -> Option<String> {
    let argv0 = decode_per_byte(first_argument(cmdline));
    argv0
        .split(|c: char| c.is_whitespace() || c == ':')
        .find(|token| !token.is_empty())
        .map(str::to_owned)
}
