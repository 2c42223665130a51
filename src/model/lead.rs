/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{AddRequest, Validate, WirePayload, require};
use crate::model::responses::ApiError;
use crate::model::utils::{null_as_default, string_or_number};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Filters for listing leads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadRequestParams {
    /// Only leads with these ids
    pub id: Vec<i64>,
    /// Page size, the API caps it at 500
    pub limit_rows: u32,
    /// Offset of the first lead of the page
    pub limit_offset: u32,
    /// Only leads owned by this user
    pub responsible_user_id: i64,
    /// Free text search
    pub query: String,
    /// Only leads in these pipeline statuses
    pub status: Vec<i64>,
    /// Task and activity filters
    pub filter: Option<LeadRequestFilter>,
}

/// Nested `filter[...]` parameters of the lead listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadRequestFilter {
    /// 1 for leads without tasks, 2 for leads with unfinished tasks
    pub tasks: u8,
    /// 1 to list only active leads
    pub active: u8,
}

impl LeadRequestParams {
    /// Creates an empty filter that lists the first page of leads
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to the given ids
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.id = ids.into_iter().collect();
        self
    }

    /// Sets page size and offset
    pub fn with_limit(mut self, rows: u32, offset: u32) -> Self {
        self.limit_rows = rows;
        self.limit_offset = offset;
        self
    }

    /// Restricts the listing to one responsible user
    pub fn with_responsible_user(mut self, user_id: i64) -> Self {
        self.responsible_user_id = user_id;
        self
    }

    /// Sets the free text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restricts the listing to the given statuses
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = i64>) -> Self {
        self.status = statuses.into_iter().collect();
        self
    }

    /// Sets the nested filter
    pub fn with_filter(mut self, filter: LeadRequestFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Query string pairs in the order the API documents them
    ///
    /// Unset (zero or empty) values are left out. List filters repeat their
    /// key with a `[]` suffix, once per value.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        for id in &self.id {
            query.push(("id[]".to_string(), id.to_string()));
        }
        if self.limit_rows > 0 {
            query.push(("limit_rows".to_string(), self.limit_rows.to_string()));
        }
        if self.limit_offset > 0 {
            query.push(("limit_offset".to_string(), self.limit_offset.to_string()));
        }
        if self.responsible_user_id > 0 {
            query.push((
                "responsible_user_id".to_string(),
                self.responsible_user_id.to_string(),
            ));
        }
        if !self.query.is_empty() {
            query.push(("query".to_string(), self.query.clone()));
        }
        for status in &self.status {
            query.push(("status[]".to_string(), status.to_string()));
        }
        if let Some(filter) = &self.filter {
            if filter.tasks > 0 {
                query.push(("filter[tasks]".to_string(), filter.tasks.to_string()));
            }
            if filter.active > 0 {
                query.push(("filter[active]".to_string(), filter.active.to_string()));
            }
        }
        query
    }
}

/// Lead to create
#[derive(Debug, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadPost {
    /// Lead name
    pub name: String,
    /// Creation time as a Unix timestamp
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    /// Last update time as a Unix timestamp
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
    /// Pipeline status
    #[serde(default)]
    pub status_id: String,
    /// Pipeline, the main pipeline when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pipeline_id: String,
    /// Owner of the lead
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub responsible_user_id: String,
    /// Deal value
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sale: String,
    /// Comma separated tag names
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags: String,
    /// Custom field values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldPost>,
    /// Linked contacts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts_id: Vec<String>,
    /// Linked company
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company_id: String,
    /// Client side id echoed back by the API
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub request_id: String,
}

impl LeadPost {
    /// Creates a lead with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the pipeline status
    pub fn with_status(mut self, status_id: impl Into<String>) -> Self {
        self.status_id = status_id.into();
        self
    }

    /// Sets the deal value
    pub fn with_sale(mut self, sale: impl Into<String>) -> Self {
        self.sale = sale.into();
        self
    }

    /// Sets the responsible user
    pub fn with_responsible_user(mut self, user_id: impl Into<String>) -> Self {
        self.responsible_user_id = user_id.into();
        self
    }

    /// Adds a custom field value
    pub fn with_custom_field(mut self, field: CustomFieldPost) -> Self {
        self.custom_fields.push(field);
        self
    }
}

impl Validate for LeadPost {
    fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)
    }
}

impl WirePayload for LeadPost {}

/// Batch body of the lead creation endpoint
pub type AddLeadRequest = AddRequest<LeadPost>;

/// Custom field value sent with a lead
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldPost {
    /// Custom field id
    pub id: String,
    /// Values of the field
    pub values: Vec<CustomFieldValue>,
}

impl CustomFieldPost {
    /// Creates a single valued custom field
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: vec![CustomFieldValue {
                value: value.into(),
                ..Default::default()
            }],
        }
    }
}

/// One value of a custom field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldValue {
    /// Value as text
    #[serde(default, deserialize_with = "string_or_number")]
    pub value: String,
    /// Enum option id for list fields
    #[serde(
        rename = "enum",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub enum_id: String,
}

/// Body of the lead listing
#[derive(Debug, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct GetLeadResponse {
    /// Pagination links
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Leads of the page
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<LeadItems>,
    /// Error block, present on failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ApiError>,
}

/// `_embedded` block of the lead listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadItems {
    /// Leads
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Lead>,
}

impl GetLeadResponse {
    /// Leads of the page
    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        self.embedded.as_ref().map_or(&[], |e| e.items.as_slice())
    }

    /// Returns true when the page holds no leads
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads().is_empty()
    }

    /// Returns true when the body carries neither a lead block nor an error block
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        self.embedded.is_none() && self.response.is_none()
    }

    /// Error reported by the API, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|r| r.error.as_deref())
            .filter(|e| !e.is_empty())
    }
}

/// Lead as returned by the listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lead {
    /// Lead id
    pub id: i64,
    /// Lead name
    pub name: String,
    /// Owner of the lead
    pub responsible_user_id: i64,
    /// Creator of the lead
    pub created_by: i64,
    /// Creation time as a Unix timestamp
    pub created_at: i64,
    /// Last update time as a Unix timestamp
    pub updated_at: i64,
    /// Account the lead belongs to
    pub account_id: i64,
    /// Whether the lead is in the trash
    pub is_deleted: bool,
    /// Main contact of the lead
    #[serde(deserialize_with = "null_as_default")]
    pub main_contact: EntityRef,
    /// Group of the responsible user
    pub group_id: i64,
    /// Closing time as a Unix timestamp, 0 while open
    pub closed_at: i64,
    /// Due time of the nearest task
    pub closest_task_at: i64,
    /// Tags
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    /// Custom field values
    #[serde(deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CustomField>,
    /// Linked contacts
    #[serde(deserialize_with = "null_as_default")]
    pub contacts: EntityRefs,
    /// Pipeline status
    pub status_id: i64,
    /// Deal value
    pub sale: i64,
    /// Pipeline
    #[serde(deserialize_with = "null_as_default")]
    pub pipeline: EntityRef,
    /// Links to the lead itself
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Reference to a single related entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityRef {
    /// Entity id
    pub id: i64,
    /// Links to the entity
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Reference to several related entities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityRefs {
    /// Entity ids
    pub id: Vec<i64>,
    /// Links to the entities
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Tag attached to a lead
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// Tag id
    pub id: i64,
    /// Tag name
    pub name: String,
}

/// Custom field value on a lead
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    /// Custom field id
    pub id: i64,
    /// Custom field name
    pub name: String,
    /// Values of the field
    pub values: Vec<CustomFieldValue>,
    /// Whether the field is predefined by amoCRM
    pub is_system: bool,
}

/// HAL style links block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    /// Link to the current resource or page
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    /// Next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    /// Previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
}

/// One link of a [`Links`] block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Target URL, relative to the account URL
    pub href: String,
    /// HTTP method to use
    pub method: String,
}
