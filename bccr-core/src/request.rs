//! Normalization of the series a caller asks for.

use std::collections::HashSet;
use std::str::FromStr;

use bccr_types::{BccrError, SeriesId};
use serde_json::Value;

/// Ordered identifier → display-name mapping.
///
/// A request built from one bare identifier is *single* and reads into a
/// single series; every other shape reads into a table, even with one entry.
/// A `None` name is resolved later from the table title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    entries: Vec<(SeriesId, Option<String>)>,
    single: bool,
}

fn normalize_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

impl SeriesRequest {
    /// One bare identifier.
    #[must_use]
    pub fn single(id: impl Into<SeriesId>) -> Self {
        Self {
            entries: vec![(id.into(), None)],
            single: true,
        }
    }

    /// Ordered mapping of identifiers to optional names.
    ///
    /// # Errors
    /// Returns `InvalidRequest` on an empty mapping or a repeated identifier.
    pub fn mapping<I, S>(entries: I) -> Result<Self, BccrError>
    where
        I: IntoIterator<Item = (SeriesId, Option<S>)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (id, name) in entries {
            if !seen.insert(id) {
                return Err(BccrError::invalid_request(format!(
                    "series {id} requested more than once"
                )));
            }
            out.push((id, normalize_name(name.map(Into::into))));
        }
        if out.is_empty() {
            return Err(BccrError::invalid_request("no series requested"));
        }
        Ok(Self {
            entries: out,
            single: false,
        })
    }

    /// Mapping with every name unset.
    ///
    /// # Errors
    /// Same as [`SeriesRequest::mapping`].
    pub fn from_ids<I>(ids: I) -> Result<Self, BccrError>
    where
        I: IntoIterator<Item = SeriesId>,
    {
        Self::mapping(ids.into_iter().map(|id| (id, None::<String>)))
    }

    /// Resolve a loosely typed JSON request.
    ///
    /// Accepts a number (single), an array of numbers, an object of
    /// `"id": "name"` pairs (a `null` name is unset), or a string in the
    /// [`FromStr`] syntax.
    ///
    /// # Errors
    /// Returns `InvalidRequest` for any other shape or a bad identifier.
    pub fn from_json(value: &Value) -> Result<Self, BccrError> {
        match value {
            Value::Number(_) => Ok(Self::single(json_id(value)?)),
            Value::Array(items) => {
                let ids = items.iter().map(json_id).collect::<Result<Vec<_>, _>>()?;
                Self::from_ids(ids)
            }
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (k, v) in map {
                    let id: SeriesId = k.parse()?;
                    let name = match v {
                        Value::Null => None,
                        Value::String(s) => Some(s.clone()),
                        other => {
                            return Err(BccrError::invalid_request(format!(
                                "display name for series {id} must be a string, got {other}"
                            )));
                        }
                    };
                    entries.push((id, name));
                }
                Self::mapping(entries)
            }
            Value::String(s) => s.parse(),
            other => Err(BccrError::invalid_request(format!(
                "expected an identifier or an identifier-to-name mapping, got {other}"
            ))),
        }
    }

    /// Whether the request was a single bare identifier.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.single
    }

    /// Entries in request order.
    #[must_use]
    pub fn entries(&self) -> &[(SeriesId, Option<String>)] {
        &self.entries
    }

    /// Identifiers in request order.
    pub fn ids(&self) -> impl Iterator<Item = SeriesId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Number of requested series.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed request.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_id(v: &Value) -> Result<SeriesId, BccrError> {
    if let Some(u) = v.as_u64() {
        return u32::try_from(u)
            .map(SeriesId)
            .map_err(|_| BccrError::invalid_request(format!("series identifier {u} is too large")));
    }
    if let Some(i) = v.as_i64() {
        return SeriesId::try_from(i);
    }
    Err(BccrError::invalid_request(format!(
        "series identifier must be a non-negative integer, got {v}"
    )))
}

/// Parses `"125"` (single), `"125,138"` (ids) and `"125=M1;138=DCCMN"` (mapping).
///
/// Entries may be separated by `,` or `;`.
impl FromStr for SeriesRequest {
    type Err = BccrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(BccrError::invalid_request("no series requested"));
        }
        if !t.contains([',', ';', '=']) {
            return Ok(Self::single(t.parse::<SeriesId>()?));
        }
        let mut entries = Vec::new();
        for part in t.split([',', ';']).map(str::trim).filter(|p| !p.is_empty()) {
            let (id, name) = match part.split_once('=') {
                Some((id, name)) => (id, Some(name.to_string())),
                None => (part, None),
            };
            entries.push((id.parse::<SeriesId>()?, name));
        }
        Self::mapping(entries)
    }
}
