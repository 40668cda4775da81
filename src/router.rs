use crate::context::AppContext;
use crate::domain::{parse_order_id, resolve, OrderReport};
use crate::errors::ServerError;
use crate::responses::{html_response, json_error_response, json_response, ResultResp};
use crate::spreadsheets::export_report_xlsx;
use crate::templates;
use astra::Request;
use serde_json::json;
use std::collections::HashMap;
use std::io::Read;
use tracing::{info, warn};
use url::form_urlencoded;

const API_ORDERS_PREFIX: &str = "/api/orders/";

pub fn handle(mut req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page(None, None)),

        ("GET", "/search") => {
            let params = parse_query(&req);
            search(ctx, param(&params, "ot"))
        }
        ("POST", "/search") => {
            let form = read_form(&mut req)?;
            search(ctx, param(&form, "ot"))
        }

        ("GET", "/export") => {
            let params = parse_query(&req);
            let report = lookup(ctx, param(&params, "ot"))?;
            info!(order_id = report.order_id, "exporting order report");
            export_report_xlsx(&report)
        }

        ("GET", "/health") => json_response(
            200,
            &json!({ "status": "ok", "tables": ctx.dataset.counts() }),
        ),

        ("GET", p) if p.starts_with(API_ORDERS_PREFIX) => {
            match lookup(ctx, &p[API_ORDERS_PREFIX.len()..]) {
                Ok(report) => json_response(200, &report),
                Err(err) => json_error_response(&err),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

/// HTML search. Bad input and unknown orders are shown as a notice on the
/// search page rather than as error pages.
fn search(ctx: &AppContext, raw: &str) -> ResultResp {
    match lookup(ctx, raw) {
        Ok(report) => html_response(templates::pages::results_page(&report)),
        Err(ServerError::BadRequest(msg)) => {
            html_response(templates::pages::home_page(Some(&msg), Some(raw)))
        }
        Err(ServerError::NotFound) => {
            let message = format!("No records found for OT {}", raw.trim());
            html_response(templates::pages::home_page(Some(&message), Some(raw)))
        }
        Err(other) => Err(other),
    }
}

/// Parses the raw OT and resolves it. `NotFound` when no shipment matches.
fn lookup(ctx: &AppContext, raw: &str) -> Result<OrderReport, ServerError> {
    let order_id = parse_order_id(raw).map_err(|err| {
        warn!(input = raw, "rejected OT input");
        ServerError::BadRequest(err.to_string())
    })?;

    match resolve(&ctx.dataset, order_id) {
        Some(report) => {
            info!(order_id, serials = report.statuses.len(), "order resolved");
            Ok(report)
        }
        None => {
            info!(order_id, "no shipments for order");
            Err(ServerError::NotFound)
        }
    }
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}
