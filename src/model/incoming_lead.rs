/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{AddRequest, Validate, WirePayload, require};
use chrono::Utc;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Incoming call event submitted by a telephony integration
///
/// amoCRM places these in the "unsorted" pipeline stage until a user accepts
/// or rejects them.
#[derive(Debug, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomingLead {
    /// Name of the source shown in the unsorted list
    pub source_name: String,
    /// Unique identifier of the event in the source system
    pub source_uid: String,
    /// Unix timestamp of the event
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    /// Pipeline receiving the lead, the main pipeline when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pipeline_id: String,
    /// Entities created once the event is accepted
    #[serde(default)]
    pub incoming_entities: IncomingEntities,
    /// Call details
    pub incoming_lead_info: IncomingLeadInfo,
}

/// Entities attached to an incoming event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomingEntities {
    /// Leads to create
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leads: Vec<IncomingEntity>,
    /// Contacts to create
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<IncomingEntity>,
}

/// Named entity inside [`IncomingEntities`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomingEntity {
    /// Entity name
    pub name: String,
}

/// Details of the call that produced the event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomingLeadInfo {
    /// Destination number (the number that was called)
    pub to: String,
    /// Origin number (the caller)
    pub from: String,
    /// Unix timestamp of the call
    pub date_call: String,
    /// Call duration in seconds
    pub duration: String,
    /// Link to the call recording
    pub link: String,
    /// Code of the telephony service, e.g. `amo_asterisk`
    pub service_code: String,
    /// Unique call identifier
    pub uniq: String,
    /// `"1"` to attach a call note to the created lead
    pub add_note: String,
}

impl IncomingLead {
    /// Creates an incoming call event stamped with the current time
    ///
    /// The caller number is also used as the name of the lead to create,
    /// which is what the amoCRM interface does for manual entries.
    pub fn new(
        source_name: impl Into<String>,
        source_uid: impl Into<String>,
        info: IncomingLeadInfo,
    ) -> Self {
        let lead_name = info.from.clone();
        Self {
            source_name: source_name.into(),
            source_uid: source_uid.into(),
            created_at: Utc::now().timestamp().to_string(),
            pipeline_id: String::new(),
            incoming_entities: IncomingEntities {
                leads: vec![IncomingEntity { name: lead_name }],
                contacts: Vec::new(),
            },
            incoming_lead_info: info,
        }
    }

    /// Sets the pipeline receiving the lead
    pub fn with_pipeline_id(mut self, pipeline_id: impl Into<String>) -> Self {
        self.pipeline_id = pipeline_id.into();
        self
    }

    /// Replaces the leads created on acceptance
    pub fn with_lead_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.incoming_entities.leads = names
            .into_iter()
            .map(|name| IncomingEntity { name: name.into() })
            .collect();
        self
    }
}

impl Validate for IncomingLead {
    fn validate(&self) -> Result<(), AppError> {
        let info = &self.incoming_lead_info;
        require("incoming_lead_info.to", &info.to)?;
        require("incoming_lead_info.from", &info.from)?;
        require("incoming_lead_info.date_call", &info.date_call)?;
        require("incoming_lead_info.duration", &info.duration)?;
        require("incoming_lead_info.link", &info.link)?;
        require("incoming_lead_info.service_code", &info.service_code)?;
        require("incoming_lead_info.uniq", &info.uniq)?;
        require("incoming_lead_info.add_note", &info.add_note)
    }
}

impl WirePayload for IncomingLead {}

/// Batch body of the incoming call endpoint
pub type IncomingLeadRequest = AddRequest<IncomingLead>;
