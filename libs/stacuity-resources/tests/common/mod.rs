// Shared fixtures for the resources integration tests.
//
// JSON payloads shaped like real provider responses, plus a helper that
// writes a config file into a temporary directory.
#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{Value as Json, json};

/// A vSlice read item as returned by `GET /VSlices/{id}`.
pub fn vslice_read_item() -> Json {
    json!({
        "id": "4f0c2a",
        "name": "vslice-A",
        "moniker": "vs-a",
        "subnets": ["10.20.0.0/16"],
        "dnsServers": ["8.8.8.8", "1.1.1.1"],
        "eventMap": null,
        "dnsMode": {"key": 2, "moniker": "custom", "name": "Custom", "active": true},
        "ipAddressFamily": {"key": 1, "moniker": "ipv4", "name": "IPv4", "active": true},
        "endpointGroupCount": 3,
        "endpointCount": 41
    })
}

/// Wrap `data` the way the API wraps a single entity.
pub fn single_envelope(data: Json) -> Json {
    json!({
        "success": true,
        "messages": [],
        "totalItems": 1,
        "limit": 1,
        "offset": 0,
        "data": data
    })
}

/// Wrap `items` the way the API wraps a list.
pub fn list_envelope(items: Vec<Json>) -> Json {
    json!({
        "success": true,
        "messages": [],
        "totalItems": items.len(),
        "limit": 50,
        "offset": 0,
        "data": items
    })
}

/// A routing policy read item with one fully populated rule and one with
/// every optional part left `null`.
pub fn routing_policy_read_item() -> Json {
    json!({
        "id": "rp-1",
        "name": "Default egress",
        "moniker": "default-egress",
        "vslice": {"id": "4f0c2a", "moniker": "vs-a", "name": "vslice-A"},
        "rateLimitUplink": {"key": 3, "moniker": "10mbps", "name": "10 Mbps", "active": true},
        "rateLimitDownlink": {"key": 4, "moniker": "50mbps", "name": "50 Mbps", "active": true},
        "packetDiscardUplinkPercentage": 0,
        "packetDiscardDownlinkPercentage": 5,
        "routingPolicyStatus": {"key": 1, "moniker": "active", "name": "Active", "active": true},
        "routingPolicyRules": [
            {
                "id": "rule-1",
                "routingPolicyId": "rp-1",
                "description": "dns to resolver",
                "ruleAction": {"key": 1, "moniker": "allow", "name": "Allow", "active": true},
                "ruleDirection": {"key": 1, "moniker": "uplink", "name": "Uplink", "active": true},
                "precedence": 10,
                "destinationIpPattern": "10.20.0.53",
                "destinationPortPattern": "53",
                "transportProtocol": {"key": 17, "moniker": "udp", "name": "UDP", "active": true},
                "routingTarget": {"id": "rt-1", "moniker": "hq-wg", "name": "HQ WireGuard"},
                "reflexive": true,
                "enabled": true,
                "regionalGateway": null
            },
            {
                "id": "rule-2",
                "routingPolicyId": "rp-1",
                "description": "drop the rest",
                "ruleAction": {"key": 2, "moniker": "drop", "name": "Drop", "active": true},
                "ruleDirection": {"key": 1, "moniker": "uplink", "name": "Uplink", "active": true},
                "precedence": 1000,
                "transportProtocol": null,
                "routingTarget": null,
                "reflexive": false,
                "enabled": true
            }
        ],
        "routingPolicyEdgeServices": null
    })
}

/// An operator policy denying one operator and steering one country.
pub fn operator_policy_read_item() -> Json {
    json!({
        "id": "op-1",
        "moniker": "no-2g",
        "name": "No 2G",
        "allow2g": false,
        "allow3g": true,
        "allow45g": true,
        "entries": [
            {
                "id": "ope-1",
                "operatorId": 23410,
                "iso3": null,
                "steeringProfileEntryAction": {"key": 1, "moniker": "deny", "name": "Deny", "active": true}
            },
            {
                "id": "ope-2",
                "operatorId": null,
                "iso3": "FRA",
                "steeringProfileEntryAction": {"key": 2, "moniker": "prefer", "name": "Prefer", "active": true}
            }
        ]
    })
}

/// A webhook event handler authenticated with a bearer token.
pub fn event_handler_read_item() -> Json {
    json!({
        "id": "eh-1",
        "moniker": "ops-hook",
        "name": "Ops hook",
        "configurationData": {
            "webhookConfig": {
                "bearerToken": "c2VjcmV0",
                "username": null,
                "password": null,
                "timeout": "30s",
                "url": "https://ops.example/hook"
            }
        },
        "summaryDescription": "POST https://ops.example/hook",
        "eventEndpointType": {"name": "Webhook", "moniker": "webhook", "type": "webhook", "active": true}
    })
}

/// Write `contents` to `stacuity.toml` inside a fresh temporary directory.
///
/// The directory is returned alongside the path so it outlives the test body.
pub fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("stacuity.toml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}

/// JSON form of `Value::Known(v)`.
pub fn known(value: impl Into<Json>) -> Json {
    json!({"state": "known", "value": value.into()})
}

/// JSON form of `Value::Null`.
pub fn null() -> Json {
    json!({"state": "null"})
}
