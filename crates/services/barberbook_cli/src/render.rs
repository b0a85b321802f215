//! Stateless text building blocks: cards, buttons, list lines.

use barberbook_common::models::{Appointment, ProviderAvailability, ProviderBlock, Service};
use barberbook_common::time::{format_local_datetime, format_slot_time};
use barberbook_pages::messages;
use barberbook_pages::{Feedback, NavAction, NavLink, Remote, Route};
use chrono_tz::Tz;

const CARD_RULE: &str = "────────────────────────────────────────";

/// A titled block of lines.
pub fn card(title: &str, lines: &[String]) -> String {
    let mut out = format!("┌ {}\n", title);
    for line in lines {
        out.push_str("│ ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('└');
    out.push_str(CARD_RULE);
    out.push('\n');
    out
}

/// A button label. While its operation runs the busy label is shown and the
/// button reads as disabled.
pub fn button(label: &str, busy_label: &str, in_flight: bool) -> String {
    if in_flight {
        format!("[ {} ] (desabilitado)", busy_label)
    } else {
        format!("[ {} ]", label)
    }
}

/// `Corte — 30 min — R$ 50.00`
pub fn service_line(service: &Service) -> String {
    format!(
        "{} — {} min — R$ {:.2}",
        service.name, service.duration, service.price
    )
}

/// `Corte — 30 min`, as in a service picker.
pub fn service_option(service: &Service) -> String {
    format!("{} — {} min", service.name, service.duration)
}

pub fn slot_label(instant: &str, tz: Tz) -> String {
    format_slot_time(instant, tz)
}

/// One line per slot: the local time, then the instant `book --slot` takes.
pub fn slot_lines(slots: &[String], tz: Tz) -> Vec<String> {
    slots
        .iter()
        .map(|slot| format!("{}  ({})", slot_label(slot, tz), slot))
        .collect()
}

pub fn weekday_row() -> String {
    messages::WEEKDAY_LABELS.join(" ")
}

pub fn feedback_line(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Success(text) => format!("✓ {}", text),
        Feedback::Error(text) => error_line(text),
    }
}

pub fn error_line(text: &str) -> String {
    format!("✗ {}", text)
}

/// Lines for one page section backed by a [`Remote`].
pub fn remote_lines<T>(
    remote: &Remote<T>,
    render: impl FnOnce(&T) -> Vec<String>,
) -> Vec<String> {
    match remote {
        Remote::Idle => Vec::new(),
        Remote::Loading => vec![messages::LOADING.to_string()],
        Remote::Ready(value) => render(value),
        Remote::Failed(message) => vec![error_line(message)],
    }
}

/// Renders every item, or the empty-state text.
pub fn list_or_empty<T>(items: &[T], empty: &str, render: impl Fn(&T) -> Vec<String>) -> Vec<String> {
    if items.is_empty() {
        return vec![empty.to_string()];
    }
    items.iter().flat_map(render).collect()
}

fn service_heading(appointment: &Appointment) -> String {
    match &appointment.service {
        Some(service) => service_option(service),
        None => messages::SERVICE_DEFAULT_NAME.to_string(),
    }
}

/// An appointment as the customer sees it.
pub fn customer_appointment(appointment: &Appointment, tz: Tz) -> Vec<String> {
    let provider = appointment
        .provider
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("—");
    vec![
        format!("{} [{}]", service_heading(appointment), appointment.status),
        format!("  {}", format_local_datetime(&appointment.date, tz)),
        format!("  {}: {}", messages::PROVIDER_LABEL, provider),
    ]
}

/// An appointment on the barber's agenda.
pub fn agenda_appointment(appointment: &Appointment, tz: Tz) -> Vec<String> {
    let mut lines = vec![
        format!("{} [{}]", service_heading(appointment), appointment.status),
        format!("  {}", slot_label(&appointment.date, tz)),
    ];
    if let Some(customer) = &appointment.customer {
        lines.push(format!("  {}: {}", messages::CUSTOMER_LABEL, customer.name));
    }
    if let Some(notes) = appointment.notes.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("  {}: {}", messages::NOTES_LABEL, notes));
    }
    lines
}

/// `Seg: 09:00 - 18:00  (id)`
pub fn availability_line(availability: &ProviderAvailability) -> String {
    format!(
        "{}: {} - {}  ({})",
        messages::weekday_label(availability.weekday),
        availability.start_time,
        availability.end_time,
        availability.id
    )
}

pub fn block_lines(block: &ProviderBlock, tz: Tz) -> Vec<String> {
    let reason = block
        .reason
        .as_deref()
        .filter(|r| !r.is_empty())
        .unwrap_or(messages::BLOCK_DEFAULT_REASON);
    vec![
        reason.to_string(),
        format!(
            "  {} → {}",
            format_local_datetime(&block.start_at, tz),
            format_local_datetime(&block.end_at, tz)
        ),
    ]
}

pub fn redirect_line(route: &Route) -> String {
    format!("{} → {}", messages::REDIRECTING, route)
}

/// The header line: `Barber Admin | Meus agendamentos | Entrar`.
pub fn nav_line(links: &[NavLink]) -> String {
    links
        .iter()
        .map(|link| match &link.action {
            NavAction::Go(route) => format!("{} ({})", link.label, route),
            NavAction::Logout => link.label.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberbook_common::models::{AppointmentStatus, PersonSummary};

    const TZ: Tz = chrono_tz::America::Sao_Paulo;

    fn corte() -> Service {
        Service {
            id: "s1".to_string(),
            name: "Corte".to_string(),
            duration: 30,
            price: 50.0,
        }
    }

    #[test]
    fn test_service_line_has_two_decimals() {
        assert_eq!(service_line(&corte()), "Corte — 30 min — R$ 50.00");
        let barba = Service {
            price: 35.5,
            ..corte()
        };
        assert_eq!(service_line(&barba), "Corte — 30 min — R$ 35.50");
    }

    #[test]
    fn test_button_shows_busy_label() {
        assert_eq!(button("Entrar", "Entrando...", false), "[ Entrar ]");
        assert_eq!(
            button("Entrar", "Entrando...", true),
            "[ Entrando... ] (desabilitado)"
        );
    }

    #[test]
    fn test_slot_lines_show_bookable_instant() {
        let slots = vec![
            "2025-05-06T12:00:00.000Z".to_string(),
            "2025-05-06T12:30:00.000Z".to_string(),
        ];
        assert_eq!(
            slot_lines(&slots, TZ),
            vec![
                "09:00  (2025-05-06T12:00:00.000Z)",
                "09:30  (2025-05-06T12:30:00.000Z)"
            ]
        );
    }

    #[test]
    fn test_redirect_line() {
        assert_eq!(redirect_line(&Route::Login), "Redirecionando... → /login");
        assert_eq!(
            redirect_line(&Route::Book("p1".to_string())),
            "Redirecionando... → /book/p1"
        );
    }

    #[test]
    fn test_weekday_row() {
        assert_eq!(weekday_row(), "Dom Seg Ter Qua Qui Sex Sáb");
    }

    #[test]
    fn test_card_frames_lines() {
        let out = card("Serviços", &["a".to_string(), "b".to_string()]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "┌ Serviços");
        assert_eq!(lines[1], "│ a");
        assert_eq!(lines[2], "│ b");
        assert!(lines[3].starts_with('└'));
    }

    #[test]
    fn test_remote_lines_states() {
        let loading: Remote<Vec<u8>> = Remote::Loading;
        assert_eq!(remote_lines(&loading, |_| vec![]), vec![messages::LOADING]);
        let failed: Remote<Vec<u8>> = Remote::Failed("Erro ao carregar agenda".to_string());
        assert_eq!(
            remote_lines(&failed, |_| vec![]),
            vec!["✗ Erro ao carregar agenda"]
        );
        let ready = Remote::Ready(vec![1u8, 2]);
        assert_eq!(
            remote_lines(&ready, |v| vec![v.len().to_string()]),
            vec!["2"]
        );
    }

    #[test]
    fn test_appointment_without_service() {
        let appointment = Appointment {
            id: "a1".to_string(),
            date: "2025-05-06T12:00:00.000Z".to_string(),
            status: AppointmentStatus::Scheduled,
            notes: Some("Trazer foto".to_string()),
            provider: None,
            customer: Some(PersonSummary {
                id: "u1".to_string(),
                name: "Carla".to_string(),
                email: "carla@example.com".to_string(),
            }),
            service: None,
        };
        assert_eq!(
            customer_appointment(&appointment, TZ),
            vec![
                "Serviço [Agendado]",
                "  06/05/2025 09:00",
                "  Barbeiro: —"
            ]
        );
        assert_eq!(
            agenda_appointment(&appointment, TZ),
            vec![
                "Serviço [Agendado]",
                "  09:00",
                "  Cliente: Carla",
                "  Obs: Trazer foto"
            ]
        );
    }

    #[test]
    fn test_block_without_reason() {
        let block = ProviderBlock {
            id: "b1".to_string(),
            start_at: "2025-05-06T12:00".to_string(),
            end_at: "2025-05-06T14:00".to_string(),
            reason: None,
        };
        assert_eq!(
            block_lines(&block, TZ),
            vec!["Bloqueio", "  06/05/2025 12:00 → 06/05/2025 14:00"]
        );
    }

    #[test]
    fn test_nav_line() {
        let links = vec![
            NavLink {
                label: messages::NAV_BRAND,
                action: NavAction::Go(Route::Home),
            },
            NavLink {
                label: messages::NAV_LOGOUT,
                action: NavAction::Logout,
            },
        ];
        assert_eq!(nav_line(&links), "Barber Admin (/) | Sair");
    }
}
