use crate::context::AppContext;
use crate::dataset::Dataset;
use crate::errors::{ResultResp, ServerError};
use crate::domain::{MovementExtra, MovementRecord, ShipmentRecord};
use astra::{Body, Request, Response};
use http::Method;
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Read;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn shipment(order_id: i64, serial: &str) -> ShipmentRecord {
    ShipmentRecord {
        order_id: Some(order_id),
        serial: serial.to_string(),
        material_code: format!("MAT-{serial}"),
        material_description: format!("Material for {serial}"),
        quantity: Some(1.0),
    }
}

fn movement(
    serial: &str,
    when: Option<NaiveDateTime>,
    sap: &str,
    extra: MovementExtra,
) -> MovementRecord {
    MovementRecord {
        serial: serial.to_string(),
        event_date: when,
        sap_code: sap.to_string(),
        description: format!("{sap} description"),
        extra,
    }
}

pub fn delivery(serial: &str, when: Option<NaiveDateTime>, sap: &str) -> MovementRecord {
    movement(
        serial,
        when,
        sap,
        MovementExtra::Delivery {
            id_number: Some("1020304050".into()),
            technician: Some("Laura Gomez".into()),
            remarks: None,
        },
    )
}

pub fn inbound(serial: &str, when: Option<NaiveDateTime>, sap: &str) -> MovementRecord {
    movement(serial, when, sap, MovementExtra::Inbound)
}

pub fn returned(serial: &str, when: Option<NaiveDateTime>, sap: &str) -> MovementRecord {
    movement(serial, when, sap, MovementExtra::Return)
}

pub fn outbound(serial: &str, when: Option<NaiveDateTime>, sap: &str) -> MovementRecord {
    movement(
        serial,
        when,
        sap,
        MovementExtra::Outbound {
            remarks: Some("to contractor".into()),
            contractor_sequence: Some("C-77".into()),
        },
    )
}

/// Order 1001 ships A1 and A2. A1 went out on Jan 5 and was delivered on
/// Jan 10; A2 never moved. Order 2002 ships C1, received on Mar 1.
pub fn sample_dataset() -> Dataset {
    Dataset {
        shipments: vec![
            shipment(1001, "A1"),
            shipment(1001, "A2"),
            shipment(2002, "C1"),
        ],
        deliveries: vec![delivery("A1", Some(date(2024, 1, 10)), "SAP-D")],
        inbound: vec![inbound("C1", Some(date(2024, 3, 1)), "SAP-I")],
        returns: vec![],
        outbound: vec![outbound("A1", Some(date(2024, 1, 5)), "SAP-O")],
    }
}

pub fn sample_context() -> AppContext {
    AppContext::new(sample_dataset())
}

pub fn body_bytes(mut resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.body_mut().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

pub fn request(method: Method, uri: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

/// Like `unwrap_err`, without requiring `Response: Debug`.
pub fn expect_err(result: ResultResp) -> ServerError {
    match result {
        Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        Err(err) => err,
    }
}
