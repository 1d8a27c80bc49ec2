//! Sort and window rules for listing notes.

use serde::Deserialize;
use strum::EnumString;

/// Column a note listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    #[default]
    Label,
    CreatedAt,
}

impl SortField {
    /// Parse from string, falling back to label for anything unrecognized
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Wire code used by clients: 1 is descending, anything else ascending
    pub fn from_code(code: u64) -> Self {
        if code == 1 {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "desc" | "descending" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

/// Query shape for listing notes. `limit == 0` means no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListArgs {
    pub sort_by: SortField,
    pub sort_direction: SortDirection,
    pub offset: u32,
    pub limit: u32,
}

impl ListArgs {
    /// ORDER BY body for this listing. Only ever one of a fixed set of
    /// literals; ties fall back to id in the same direction.
    pub fn order_clause(&self) -> &'static str {
        match (self.sort_by, self.sort_direction) {
            (SortField::Label, SortDirection::Ascending) => "label ASC, id ASC",
            (SortField::Label, SortDirection::Descending) => "label DESC, id DESC",
            (SortField::CreatedAt, SortDirection::Ascending) => "created_at ASC, id ASC",
            (SortField::CreatedAt, SortDirection::Descending) => "created_at DESC, id DESC",
        }
    }

    /// LIMIT value to bind; SQLite treats a negative limit as unbounded
    pub fn limit_param(&self) -> i64 {
        if self.limit == 0 { -1 } else { i64::from(self.limit) }
    }

    pub fn offset_param(&self) -> i64 {
        i64::from(self.offset)
    }
}

/// `direction` accepts the numeric code or a name
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DirectionParam {
    Code(u64),
    Name(String),
}

/// Request body for `GET /api/v1/note`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListNotesRequest {
    #[serde(rename = "sortBy", default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub direction: Option<DirectionParam>,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
}

impl From<ListNotesRequest> for ListArgs {
    fn from(req: ListNotesRequest) -> Self {
        let sort_direction = match req.direction {
            Some(DirectionParam::Code(code)) => SortDirection::from_code(code),
            Some(DirectionParam::Name(name)) => SortDirection::from_str_or_default(&name),
            None => SortDirection::Ascending,
        };

        ListArgs {
            sort_by: req
                .sort_by
                .as_deref()
                .map(SortField::from_str_or_default)
                .unwrap_or_default(),
            sort_direction,
            offset: req.offset,
            limit: req.limit,
        }
    }
}
