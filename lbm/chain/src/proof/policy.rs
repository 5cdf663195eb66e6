/// Query type of raw store queries, the only ones that can be proven.
pub const STORE_QUERY_TYPE: &str = "store";

/// Store subpaths and whether a query on them must carry a proof. Subpaths
/// that are not listed do not require one.
pub const STORE_PROOF_RULES: &[(&str, bool)] = &[("/key", true), ("/subspace", false)];

/// A query path of the form `/store/<store_name>/<subpath>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreQueryPath<'a> {
    pub store_name: &'a str,
    /// Remainder of the path, re-prefixed with `/`. Not split any further.
    pub subpath: String,
}

impl<'a> StoreQueryPath<'a> {
    /// Parses a store query path, returning `None` for any other shape.
    pub fn parse(path: &'a str) -> Option<Self> {
        let mut segments = path.strip_prefix('/')?.splitn(3, '/');

        let query_type = segments.next()?;
        let store_name = segments.next()?;
        let subpath = segments.next()?;

        if query_type != STORE_QUERY_TYPE {
            return None;
        }

        Some(Self {
            store_name,
            subpath: format!("/{subpath}"),
        })
    }

    pub fn requires_proof(&self) -> bool {
        store_requires_proof(&self.subpath)
    }
}

/// Whether a query on the given store subpath must be proven.
pub fn store_requires_proof(subpath: &str) -> bool {
    STORE_PROOF_RULES
        .iter()
        .find(|(rule, _)| *rule == subpath)
        .map_or(false, |(_, required)| *required)
}

/// Whether a query on `path` must be answered with a proof.
///
/// Paths that do not follow the `/store/<store_name>/<subpath>` grammar never
/// require one.
pub fn requires_proof(path: &str) -> bool {
    StoreQueryPath::parse(path).map_or(false, |path| path.requires_proof())
}
