use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use stacuity_model::mapping;
use stacuity_model::{Direction, Shaped, convert_from_wire, convert_to_wire};

use crate::error::ResourceError;
use crate::state::endpoint_group::{EndpointGroupReadModel, EndpointGroupResourceModel};
use crate::state::event_handler::{EventHandlerReadModel, EventHandlerResourceModel};
use crate::state::event_map::{EventMapReadModel, EventMapResourceModel};
use crate::state::operator_policy::{OperatorPolicyReadModel, OperatorPolicyResourceModel};
use crate::state::paging::FilterModel;
use crate::state::regional_policy::{RegionalPolicyReadModel, RegionalPolicyResourceModel};
use crate::state::routing_policy::{RoutingPolicyReadModel, RoutingPolicyResourceModel};
use crate::state::routing_target::{RoutingTargetReadModel, RoutingTargetResourceModel};
use crate::state::vslice::{VSliceReadModel, VSliceResourceModel};
use crate::wire::endpoint_group::{EndpointGroupModifyItem, EndpointGroupReadItem};
use crate::wire::envelope::ApiSingle;
use crate::wire::event_handler::{EventHandlerModifyItem, EventHandlerReadItem};
use crate::wire::event_map::{EventMapModifyItem, EventMapReadItem};
use crate::wire::operator_policy::{OperatorPolicyModifyItem, OperatorPolicyReadItem};
use crate::wire::paging::PagingState;
use crate::wire::regional_policy::{RegionalPolicyModifyItem, RegionalPolicyReadItem};
use crate::wire::routing_policy::{RoutingPolicyModifyItem, RoutingPolicyReadItem};
use crate::wire::routing_target::{RoutingTargetModifyItem, RoutingTargetReadItem};
use crate::wire::vslice::{VSliceModifyItem, VSliceReadItem};

type Json = serde_json::Value;

/// Entities with registered wire/state model pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    VSlice,
    EventMap,
    RoutingPolicy,
    RoutingTarget,
    EndpointGroup,
    OperatorPolicy,
    RegionalPolicy,
    EventHandler,
    Paging,
}

/// Dispatch a generic function on the model types registered for an entity.
///
/// Arms list `(read item, read model, resource model, modify item)`.
macro_rules! with_models {
    ($entity:expr, $func:ident, $pick:tt $(, $arg:expr)*) => {
        match $entity {
            Entity::VSlice => with_models!(@pick $pick, $func,
                VSliceReadItem, VSliceReadModel, VSliceResourceModel, VSliceModifyItem $(, $arg)*),
            Entity::EventMap => with_models!(@pick $pick, $func,
                EventMapReadItem, EventMapReadModel, EventMapResourceModel, EventMapModifyItem $(, $arg)*),
            Entity::RoutingPolicy => with_models!(@pick $pick, $func,
                RoutingPolicyReadItem, RoutingPolicyReadModel, RoutingPolicyResourceModel,
                RoutingPolicyModifyItem $(, $arg)*),
            Entity::RoutingTarget => with_models!(@pick $pick, $func,
                RoutingTargetReadItem, RoutingTargetReadModel, RoutingTargetResourceModel,
                RoutingTargetModifyItem $(, $arg)*),
            Entity::EndpointGroup => with_models!(@pick $pick, $func,
                EndpointGroupReadItem, EndpointGroupReadModel, EndpointGroupResourceModel,
                EndpointGroupModifyItem $(, $arg)*),
            Entity::OperatorPolicy => with_models!(@pick $pick, $func,
                OperatorPolicyReadItem, OperatorPolicyReadModel, OperatorPolicyResourceModel,
                OperatorPolicyModifyItem $(, $arg)*),
            Entity::RegionalPolicy => with_models!(@pick $pick, $func,
                RegionalPolicyReadItem, RegionalPolicyReadModel, RegionalPolicyResourceModel,
                RegionalPolicyModifyItem $(, $arg)*),
            Entity::EventHandler => with_models!(@pick $pick, $func,
                EventHandlerReadItem, EventHandlerReadModel, EventHandlerResourceModel,
                EventHandlerModifyItem $(, $arg)*),
            Entity::Paging => with_models!(@pick $pick, $func,
                PagingState, FilterModel, FilterModel, PagingState $(, $arg)*),
        }
    };
    (@pick read, $func:ident, $item:ty, $read:ty, $resource:ty, $modify:ty $(, $arg:expr)*) => {
        $func::<$item, $read>($($arg),*)
    };
    (@pick resource, $func:ident, $item:ty, $read:ty, $resource:ty, $modify:ty $(, $arg:expr)*) => {
        $func::<$item, $resource>($($arg),*)
    };
    (@pick modify, $func:ident, $item:ty, $read:ty, $resource:ty, $modify:ty $(, $arg:expr)*) => {
        $func::<$resource, $modify>($($arg),*)
    };
}

impl Entity {
    pub const ALL: [Entity; 9] = [
        Entity::VSlice,
        Entity::EventMap,
        Entity::RoutingPolicy,
        Entity::RoutingTarget,
        Entity::EndpointGroup,
        Entity::OperatorPolicy,
        Entity::RegionalPolicy,
        Entity::EventHandler,
        Entity::Paging,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Entity::VSlice => "vslice",
            Entity::EventMap => "event_map",
            Entity::RoutingPolicy => "routing_policy",
            Entity::RoutingTarget => "routing_target",
            Entity::EndpointGroup => "endpoint_group",
            Entity::OperatorPolicy => "operator_policy",
            Entity::RegionalPolicy => "regional_policy",
            Entity::EventHandler => "event_handler",
            Entity::Paging => "paging",
        }
    }

    /// Read item (or list / envelope of them) into the read model.
    pub fn read_state(&self, input: Json) -> Result<Json, ResourceError> {
        with_models!(self, from_wire_json, read, input).map_err(|e| e.with_context(self))
    }

    /// Read item (or list / envelope of them) into the resource model.
    pub fn resource_state(&self, input: Json) -> Result<Json, ResourceError> {
        with_models!(self, from_wire_json, resource, input).map_err(|e| e.with_context(self))
    }

    /// Resource model into the create / update body.
    pub fn modify_request(&self, input: Json) -> Result<Json, ResourceError> {
        with_models!(self, to_wire_json, modify, input).map_err(|e| e.with_context(self))
    }

    /// Resolve the three conversion plans of this entity.
    pub fn validate(&self) -> Result<(), ResourceError> {
        with_models!(self, validate_pair, read, Direction::FromWire)
            .and_then(|()| with_models!(self, validate_pair, resource, Direction::FromWire))
            .and_then(|()| with_models!(self, validate_pair, modify, Direction::ToWire))
            .map_err(|e| ResourceError::from(e).with_context(self))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Entity {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Entity::ALL
            .into_iter()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| ResourceError::UnknownEntity(s.to_string()))
    }
}

/// Resolve every registered plan. Meant to run once at startup.
pub fn validate_all() -> Result<(), ResourceError> {
    for entity in Entity::ALL {
        entity.validate()?;
        tracing::debug!(%entity, "conversion plans resolved");
    }
    Ok(())
}

fn validate_pair<S: Shaped, D: Shaped>(
    direction: Direction,
) -> Result<(), stacuity_model::ConversionError> {
    mapping::validate::<S, D>(direction)
}

/// Strip a response envelope, failing on `success == false`. Anything that
/// is not an object with a `success` key is taken as the payload itself.
fn unwrap_envelope(input: Json) -> Result<Json, ResourceError> {
    let is_envelope = input.as_object().is_some_and(|o| o.contains_key("success"));
    if !is_envelope {
        return Ok(input);
    }
    let envelope: ApiSingle<Json> = serde_json::from_value(input)?;
    envelope.into_result()
}

fn from_wire_json<W, V>(input: Json) -> Result<Json, ResourceError>
where
    W: Shaped + DeserializeOwned,
    V: Shaped + Serialize,
{
    let data = unwrap_envelope(input)?;
    if data.is_array() {
        let items: Vec<W> = serde_json::from_value(data)?;
        let mut models: Vec<V> = Vec::with_capacity(items.len());
        convert_from_wire(&items, &mut models)?;
        Ok(serde_json::to_value(models)?)
    } else {
        let item: W = serde_json::from_value(data)?;
        let mut model = V::default();
        convert_from_wire(&item, &mut model)?;
        Ok(serde_json::to_value(model)?)
    }
}

fn to_wire_json<V, W>(input: Json) -> Result<Json, ResourceError>
where
    V: Shaped + DeserializeOwned,
    W: Shaped + Serialize,
{
    let model: V = serde_json::from_value(input)?;
    let mut item = W::default();
    convert_to_wire(&model, &mut item)?;
    Ok(serde_json::to_value(item)?)
}
