//! Call-stack snapshots for `trace!`.

use serde::Serialize;

// Upper bound on unwinder frames reported above `capture`.
const PRELUDE_FRAMES: usize = 16;

/// Return addresses of the frames on the calling thread's stack.
///
/// Capture walks the stack without resolving symbols; call
/// [`symbols`](Self::symbols) when a readable backtrace is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StackAddresses(Vec<usize>);

impl StackAddresses {
    /// Snapshot at most `depth` frames, starting at the caller of this
    /// function. A depth of zero yields an empty snapshot.
    ///
    /// Frames of the unwinder and of `capture` itself are dropped before
    /// `depth` is counted. If `capture`'s own frame cannot be identified,
    /// the walk keeps every frame from the top of the stack.
    #[inline(never)]
    pub fn capture(depth: usize) -> Self {
        let mut addresses = Vec::new();
        if depth == 0 {
            return Self(addresses);
        }

        let own = Self::capture as *const () as usize;
        let mut found_own = false;
        backtrace::trace(|frame| {
            if !found_own && frame.symbol_address() as usize == own {
                found_own = true;
                addresses.clear();
                return true;
            }
            let ip = frame.ip() as usize;
            if ip != 0 {
                addresses.push(ip);
            }
            let limit = if found_own { depth } else { depth + PRELUDE_FRAMES };
            addresses.len() < limit
        });
        addresses.truncate(depth);
        Self(addresses)
    }

    pub fn from_addresses(addresses: Vec<usize>) -> Self {
        Self(addresses)
    }

    pub fn addresses(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve every address to a symbol name, `"<unknown>"` when the
    /// address cannot be resolved.
    pub fn symbols(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|&address| {
                let mut name = None;
                backtrace::resolve(address as *mut std::ffi::c_void, |symbol| {
                    if name.is_none() {
                        name = symbol.name().map(|n| n.to_string());
                    }
                });
                name.unwrap_or_else(|| "<unknown>".to_string())
            })
            .collect()
    }
}
