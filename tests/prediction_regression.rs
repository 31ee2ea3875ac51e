//! Prediction Regression Tests
//!
//! Exercises the engine end to end over the JSON wire shapes: raw request
//! body in, serialized prediction out. Asserts on the exact field names,
//! derived values, and alert ordering that the dashboard and query layer
//! depend on.

use millguard::{
    calculate_health_score, detect_anomalies, enrich_reading, predict, status_from_score,
    summarize_fleet, AlertSeverity, HealthStatus, MachineReading, MachineType, PredictRequest,
    StoredReading,
};
use serde_json::{json, Value};

fn predict_json(body: Value) -> Value {
    let request: PredictRequest = serde_json::from_value(body).expect("request deserializes");
    let prediction = predict(&request).expect("prediction succeeds");
    serde_json::to_value(prediction).expect("prediction serializes")
}

#[test]
fn nominal_reading_wire_shape() {
    let v = predict_json(json!({
        "machineType": "M",
        "airTemperature": 300.0,
        "processTemperature": 310.5,
        "rotationalSpeed": 1500,
        "torque": 40.0,
        "toolWear": 100
    }));

    assert_eq!(v["healthScore"], 80);
    assert_eq!(v["status"], "GOOD");
    assert_eq!(v["failureStatus"], false);
    assert_eq!(v["predictedFailure"], "No Failure Predicted");
    assert_eq!(v["alerts"], json!([]));
    assert_eq!(v["power"], 6283);
    assert_eq!(v["rulEstimate"], "~153 min of tool life remaining");
    assert_eq!(v["tempDifferential"], "10.50");

    // Normalized input is echoed back with the failure flag forced off
    assert_eq!(v["inputs"]["machineType"], "M");
    assert_eq!(v["inputs"]["failureStatus"], false);
    assert_eq!(v["inputs"]["airTemperature"], 300.0);
}

#[test]
fn forced_failure_scores_zero_and_classifies_critical() {
    let reading = MachineReading {
        machine_type: MachineType::M,
        air_temperature: 300.0,
        process_temperature: 310.5,
        rotational_speed: 1500.0,
        torque: 40.0,
        tool_wear: 100.0,
        failure_status: true,
    };
    let score = calculate_health_score(&reading);
    assert_eq!(score, 0);
    assert_eq!(status_from_score(score, true), HealthStatus::Critical);
}

#[test]
fn critical_tool_wear_prediction() {
    let v = predict_json(json!({
        "machineType": "M",
        "airTemperature": 300.0,
        "processTemperature": 310.5,
        "rotationalSpeed": 1500,
        "torque": 40.0,
        "toolWear": 245
    }));

    assert_eq!(v["alerts"][0]["type"], "TWF");
    assert_eq!(v["alerts"][0]["severity"], "critical");
    assert_eq!(v["failureStatus"], true);
    assert_eq!(v["status"], "CRITICAL");
    assert_eq!(v["predictedFailure"], v["alerts"][0]["message"]);
}

#[test]
fn exhausted_tool_rul_string() {
    let v = predict_json(json!({
        "airTemperature": 300.0,
        "processTemperature": 310.5,
        "rotationalSpeed": 1500,
        "torque": 40.0,
        "toolWear": 260
    }));
    assert_eq!(v["rulEstimate"], "Tool replacement required immediately");
}

#[test]
fn all_five_alerts_emit_in_fixed_order() {
    let reading = MachineReading {
        machine_type: MachineType::H,
        air_temperature: 307.0,
        process_temperature: 315.0,
        rotational_speed: 1300.0,
        torque: 80.0,
        tool_wear: 220.0,
        failure_status: false,
    };
    let alerts = detect_anomalies(&reading);
    let types: Vec<String> = alerts.iter().map(|a| a.alert_type.to_string()).collect();
    assert_eq!(types, vec!["TWF", "HDF", "PWF", "OSF", "TEMP"]);

    // Running the same reading twice yields identical output (pure function)
    assert_eq!(alerts, detect_anomalies(&reading));
}

#[test]
fn validation_error_reports_missing_fields_without_scoring() {
    let request: PredictRequest = serde_json::from_value(json!({
        "machineType": "M",
        "airTemperature": 300.0
    }))
    .expect("request deserializes");
    let err = predict(&request).expect_err("validation fails");
    assert_eq!(
        err.fields,
        vec!["processTemperature", "rotationalSpeed", "torque", "toolWear"]
    );
}

#[test]
fn batch_enrichment_and_summary_shapes() {
    let records: Vec<StoredReading> = serde_json::from_value(json!([
        {
            "machineId": "M-14860",
            "machineType": "M",
            "airTemperature": 300.0,
            "processTemperature": 310.5,
            "rotationalSpeed": 1500,
            "torque": 40.0,
            "toolWear": 100,
            "failureStatus": false,
            "timestamp": "2024-05-01T12:00:00Z"
        },
        {
            "machineId": "L-47181",
            "machineType": "L",
            "airTemperature": 300.0,
            "processTemperature": 310.5,
            "rotationalSpeed": 1500,
            "torque": 40.0,
            "toolWear": 100,
            "failureStatus": true,
            "timestamp": "2024-05-01T13:00:00Z"
        }
    ]))
    .expect("stored readings deserialize");

    let enriched: Vec<_> = records.iter().map(enrich_reading).collect();
    let v = serde_json::to_value(&enriched).expect("enriched serialize");
    assert_eq!(v[0]["machineId"], "M-14860");
    assert_eq!(v[0]["healthScore"], 80);
    assert_eq!(v[0]["status"], "GOOD");
    assert_eq!(v[1]["healthScore"], 0);
    assert_eq!(v[1]["status"], "CRITICAL");

    let summary = summarize_fleet(&enriched);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.operational, 1);
    assert_eq!(summary.failure_rate, "50.00");
    assert_eq!(summary.average_health_score, 40);
}

#[test]
fn out_of_range_values_saturate_rather_than_error() {
    // Absurd values: every component still answers
    let v = predict_json(json!({
        "airTemperature": 1000.0,
        "processTemperature": -50.0,
        "rotationalSpeed": 100000,
        "torque": -30.0,
        "toolWear": 0
    }));
    assert_eq!(v["healthScore"], 0);
    assert_eq!(v["status"], "CRITICAL");
    assert_eq!(v["failureStatus"], true);
    assert!(v["alerts"].as_array().map(Vec::len).unwrap_or(0) >= 1);
}

#[test]
fn warning_alerts_do_not_derive_failure() {
    // 20 Nm at 1500 RPM = ~3142 W: PWF warning only
    let v = predict_json(json!({
        "airTemperature": 300.0,
        "processTemperature": 310.5,
        "rotationalSpeed": 1500,
        "torque": 20.0,
        "toolWear": 100
    }));
    assert_eq!(v["failureStatus"], false);
    assert_eq!(v["alerts"][0]["type"], "PWF");
    assert_eq!(v["alerts"][0]["severity"], "warning");
    let msg = v["predictedFailure"].as_str().unwrap_or_default();
    assert!(msg.contains("3142"), "diagnosis was: {msg}");
}
