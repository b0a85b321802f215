use barberbook_api::ApiClient;
use barberbook_common::models::{
    AppointmentStatus, NewAppointment, NewBlock, NewService, ProviderConfig, RegisterRequest,
    SlotQuery,
};
use barberbook_common::{create_client, ApiError, BookingApi, MessageOrder};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::with_client(server.uri(), create_client(5).unwrap());
    (server, client)
}

#[tokio::test]
async fn test_login_unwraps_token_and_user() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ana@example.com", "password": "segredo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "tok-1",
            "user": {"id": "u1", "name": "Ana", "email": "ana@example.com", "isProvider": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.login("ana@example.com", "segredo").await.unwrap();
    assert_eq!(response.access_token, "tok-1");
    assert_eq!(response.user.name, "Ana");
    assert!(!response.user.is_provider);
}

#[tokio::test]
async fn test_authenticated_calls_send_bearer_token() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/appointments"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointments": [{
                "id": "a1",
                "date": "2025-05-06T12:00:00.000Z",
                "status": "SCHEDULED",
                "service": {"id": "s1", "name": "Corte", "duration": 30, "price": 50.0}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let appointments = client.list_appointments("tok-1").await.unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].status, AppointmentStatus::Scheduled);
}

#[tokio::test]
async fn test_slot_query_parameters() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/appointments/slots"))
        .and(query_param("providerId", "p1"))
        .and(query_param("date", "2025-05-06"))
        .and(query_param("serviceId", "s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slots": ["2025-05-06T12:00:00.000Z", "2025-05-06T12:30:00.000Z"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let slots = client
        .available_slots(&SlotQuery {
            provider_id: "p1".to_string(),
            date: "2025-05-06".to_string(),
            service_id: "s1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(
        slots,
        vec!["2025-05-06T12:00:00.000Z", "2025-05-06T12:30:00.000Z"]
    );
}

#[tokio::test]
async fn test_missing_lists_decode_empty() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/provider/blocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"blocks": null})))
        .mount(&server)
        .await;

    assert!(client.list_providers().await.unwrap().is_empty());
    assert!(client.list_blocks("tok").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_body_is_extracted() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/appointments"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Já existe um agendamento neste horário",
            "message": "conflict"
        })))
        .mount(&server)
        .await;

    let err = client
        .create_appointment(
            "tok",
            &NewAppointment {
                provider_id: "p1".to_string(),
                service_id: "s1".to_string(),
                date: "2025-05-06T12:00:00.000Z".to_string(),
                notes: String::new(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(409));
    assert_eq!(
        err.user_message("Erro ao criar agendamento"),
        "Já existe um agendamento neste horário"
    );
    assert_eq!(
        err.server_message(MessageOrder::MessageFirst).as_deref(),
        Some("conflict")
    );
}

#[tokio::test]
async fn test_non_json_error_body_falls_back() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/providers/p9"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client.get_provider("p9").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 502, body: None }));
    assert_eq!(err.user_message("Erro ao carregar barbeiro"), "Erro ao carregar barbeiro");
}

#[tokio::test]
async fn test_block_bounds_are_passed_through() {
    let (server, client) = setup().await;
    // startAt after endAt: sent exactly as given
    Mock::given(method("POST"))
        .and(path("/api/provider/blocks"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({
            "startAt": "2025-05-06T18:00",
            "endAt": "2025-05-06T09:00",
            "reason": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "block": {"id": "b1", "startAt": "2025-05-06T18:00", "endAt": "2025-05-06T09:00", "reason": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let block = client
        .create_block(
            "tok",
            &NewBlock {
                start_at: "2025-05-06T18:00".to_string(),
                end_at: "2025-05-06T09:00".to_string(),
                reason: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(block.id, "b1");
    assert!(block.reason.is_none());
}

#[tokio::test]
async fn test_provider_config_defaults_and_save() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/provider/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cancelBookingHours": 6})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/provider/config"))
        .and(body_json(json!({"maxBookingDays": 30, "cancelBookingHours": 6})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let loaded = client.get_provider_config("tok").await.unwrap();
    assert_eq!(
        loaded,
        ProviderConfig {
            max_booking_days: 7,
            cancel_booking_hours: 6
        }
    );

    let wanted = ProviderConfig {
        max_booking_days: 30,
        cancel_booking_hours: 6,
    };
    assert_eq!(client.save_provider_config("tok", &wanted).await.unwrap(), wanted);
}

#[tokio::test]
async fn test_service_create_and_delete() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/provider/services"))
        .and(body_json(json!({"name": "Barba", "duration": 30, "price": 50.0})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "service": {"id": "s2", "name": "Barba", "duration": 30, "price": 50}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/provider/services/s2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_provider_service(
            "tok",
            &NewService {
                name: "Barba".to_string(),
                duration: 30,
                price: 50.0,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.price, 50.0);
    client.delete_provider_service("tok", "s2").await.unwrap();
}

#[tokio::test]
async fn test_provider_agenda_by_date() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/provider/appointments"))
        .and(query_param("date", "2025-05-06"))
        .and(header("authorization", "Bearer prov"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"appointments": []})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client
        .provider_appointments("prov", "2025-05-06")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_plain_text_success_replies_are_accepted() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/provider/services/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/provider/availability/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_string("Created"))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_provider_service("tok", "s1").await.unwrap();
    client.delete_availability("tok", "a1").await.unwrap();
    client
        .register(&RegisterRequest {
            name: "Carla".to_string(),
            email: "carla@example.com".to_string(),
            password: "segredo".to_string(),
            is_provider: false,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_rejection_keeps_error_body() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/provider/availability/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": "Disponibilidade não encontrada"})),
        )
        .mount(&server)
        .await;

    let err = client
        .delete_availability("tok", "missing")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(
        err.user_message("Erro ao remover disponibilidade"),
        "Disponibilidade não encontrada"
    );
}
