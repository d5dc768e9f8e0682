// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport and panel client using wiremock.

use leafctl::error::{DeviceError, EffectError, Error, ValueError};
use leafctl::protocol::HttpTransport;
use leafctl::types::{Brightness, ColorTemperature, HslColor, RgbColor};
use leafctl::{EffectFrame, PanelClient, PanelEndpoint};
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PanelClient<HttpTransport> {
    let host = server.uri().replace("http://", "");
    let endpoint = PanelEndpoint::new("test-panel", host, "testtoken");
    PanelClient::http(&endpoint).unwrap()
}

// ============================================================================
// State Commands Tests
// ============================================================================

mod state_commands {
    use super::*;

    #[tokio::test]
    async fn power_on_puts_on_value() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/state"))
            .and(body_json(serde_json::json!({"on": {"value": true}})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        client.power_on().await.unwrap();
    }

    #[tokio::test]
    async fn power_off_puts_off_value() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/state"))
            .and(body_json(serde_json::json!({"on": {"value": false}})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        client.power_off().await.unwrap();
    }

    #[tokio::test]
    async fn set_hsl_puts_all_three_components() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/state"))
            .and(body_json(serde_json::json!({
                "hue": {"value": 120},
                "sat": {"value": 100},
                "brightness": {"value": 50}
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let color = HslColor::new(120, 100, 50).unwrap();
        client.set_hsl(color).await.unwrap();
    }

    #[tokio::test]
    async fn set_rgb_puts_hex_string() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/state"))
            .and(body_json(serde_json::json!({"rgb": {"value": "#FF0000"}})))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        client.set_rgb(RgbColor::new(255, 0, 0)).await.unwrap();
    }

    #[tokio::test]
    async fn set_color_temperature_puts_kelvin() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/state"))
            .and(body_json(serde_json::json!({"ct": {"value": 4000}})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let temperature = ColorTemperature::new(4000).unwrap();
        client.set_color_temperature(temperature).await.unwrap();
    }

    #[tokio::test]
    async fn set_brightness_puts_percentage() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/state"))
            .and(body_json(serde_json::json!({"brightness": {"value": 75}})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        client
            .set_brightness(Brightness::new(75).unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn out_of_range_brightness_never_reaches_the_device() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let _client = client_for(&mock_server);
        let result = Brightness::new(101);

        assert!(matches!(
            result,
            Err(ValueError::OutOfRange {
                field: "brightness",
                ..
            })
        ));
    }
}

// ============================================================================
// Effect Commands Tests
// ============================================================================

mod effect_commands {
    use super::*;

    #[tokio::test]
    async fn list_effects_preserves_device_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/testtoken/effects/effectsList"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!(["Aurora", "Flow", "Color Burst"])),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let effects = client.list_effects().await.unwrap();

        assert_eq!(effects, vec!["Aurora", "Flow", "Color Burst"]);
    }

    #[tokio::test]
    async fn select_effect_puts_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/effects"))
            .and(body_json(serde_json::json!({"select": "Aurora"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        client.select_effect("Aurora").await.unwrap();
    }

    #[tokio::test]
    async fn custom_effect_puts_write_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/effects"))
            .and(body_json(serde_json::json!({
                "write": {
                    "command": "display",
                    "animType": "custom",
                    "animData": "0 1 0 7 0 1 255 0 0 0 0 10",
                    "loop": false
                }
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let frames = [EffectFrame::new(7, 255, 0, 0, 10)];
        client.set_custom_effect(&frames).await.unwrap();
    }

    #[tokio::test]
    async fn custom_effect_encodes_every_frame() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/effects"))
            .and(body_json(serde_json::json!({
                "write": {
                    "command": "display",
                    "animType": "custom",
                    "animData": "0 2 0 1 0 1 10 20 30 0 0 5 0 2 0 1 40 50 60 0 0 5",
                    "loop": false
                }
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let frames = [
            EffectFrame::new(1, 10, 20, 30, 5),
            EffectFrame::new(2, 40, 50, 60, 5),
        ];
        client.set_custom_effect(&frames).await.unwrap();
    }

    #[tokio::test]
    async fn empty_custom_effect_never_reaches_the_device() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.set_custom_effect(&[]).await;

        assert!(matches!(result, Err(Error::Effect(EffectError::Empty))));
    }
}

// ============================================================================
// Panel Info Tests
// ============================================================================

mod panel_info {
    use super::*;

    fn full_info_document() -> serde_json::Value {
        serde_json::json!({
            "name": "Living Room",
            "serialNo": "S17062BA877",
            "manufacturer": "Nanoleaf",
            "firmwareVersion": "3.3.3",
            "model": "NL22",
            "state": {
                "on": {"value": true},
                "brightness": {"value": 80, "max": 100, "min": 0},
                "hue": {"value": 120, "max": 360, "min": 0},
                "sat": {"value": 50, "max": 100, "min": 0},
                "ct": {"value": 4000, "max": 6500, "min": 1200},
                "colorMode": "hs"
            },
            "effects": {"select": "Flow", "effectsList": ["Color Burst", "Flow"]},
            "panelLayout": {
                "globalOrientation": {"value": 0, "max": 360, "min": 0},
                "layout": {
                    "numPanels": 2,
                    "sideLength": 150,
                    "positionData": [
                        {"panelId": 186, "x": 100, "y": 100, "o": 0},
                        {"panelId": 187, "x": 200, "y": 100, "o": 60}
                    ]
                }
            },
            "rhythm": {
                "rhythmConnected": false,
                "rhythmActive": false,
                "rhythmId": null,
                "hardwareVersion": null,
                "firmwareVersion": null,
                "auxAvailable": null,
                "rhythmMode": null,
                "rhythmPos": null
            }
        })
    }

    #[tokio::test]
    async fn decodes_full_document() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/testtoken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_info_document()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let info = client.panel_info().await.unwrap();

        assert_eq!(info.name, "Living Room");
        assert!(info.is_on());
        assert_eq!(info.state.brightness.value, 80);
        assert_eq!(info.state.brightness.bounds(), Some((0, 100)));
        assert_eq!(info.effects.list, vec!["Color Burst", "Flow"]);
        assert_eq!(info.panel_layout.layout.num_panels, 2);
        assert_eq!(info.panel_layout.layout.position_data[1].panel_id, 187);
        assert!(!info.rhythm.connected);
        assert_eq!(info.rhythm.id, None);
    }

    #[tokio::test]
    async fn missing_required_field_is_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/testtoken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "Living Room",
                "serialNo": "S17062BA877",
                "model": "NL22",
                "state": {"colorMode": "effect"}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.panel_info().await;

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/testtoken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.panel_info().await;

        assert!(matches!(result, Err(Error::Parse(_))));
    }
}

// ============================================================================
// Raw GET Tests
// ============================================================================

mod raw_get {
    use super::*;

    #[tokio::test]
    async fn returns_untouched_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/testtoken/state/brightness"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"value":80,"max":100,"min":0}"#),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let body = client.get_raw("state/brightness").await.unwrap();

        assert_eq!(body, r#"{"value":80,"max":100,"min":0}"#);
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[tokio::test]
    async fn rejected_token_is_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.power_on().await;

        assert!(matches!(
            result,
            Err(Error::Device(DeviceError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn device_failure_carries_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(500).set_body_string(r#"{"error":"internal failure"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.power_on().await.unwrap_err();

        match err {
            Error::Device(DeviceError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("internal failure"));
            }
            other => panic!("expected device error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unprocessable_write_is_a_device_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/testtoken/effects"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.select_effect("No Such Effect").await.unwrap_err();

        assert!(matches!(
            err,
            Error::Device(DeviceError::Status { status: 422, .. })
        ));
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // A port that's definitely not listening
        let endpoint = PanelEndpoint::new("test-panel", "127.0.0.1:59999", "testtoken");
        let client = PanelClient::http(&endpoint).unwrap();

        let result = client.power_on().await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
