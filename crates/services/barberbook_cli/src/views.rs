//! Whole screens as text, built from page controller state.

use barberbook_pages::messages;
use barberbook_pages::{
    BookPage, BookingFlow, DashboardPage, LoginPage, Navbar, ProviderDashboardPage,
    ProviderSettingsPage, RegisterPage,
};
use chrono_tz::Tz;

use crate::render::{
    agenda_appointment, availability_line, block_lines, button, card, customer_appointment,
    error_line, feedback_line, list_or_empty, nav_line, remote_lines, service_line,
    service_option, slot_lines, weekday_row,
};

pub fn navbar(navbar: &Navbar) -> String {
    let mut out = nav_line(&navbar.links());
    if let Some(session) = &navbar.current {
        let role = if session.is_provider() { "barbeiro" } else { "cliente" };
        out.push_str(&format!("\n{} <{}> ({})", session.user.name, session.user.email, role));
    }
    if let Some(error) = &navbar.error {
        out.push('\n');
        out.push_str(&error_line(error));
    }
    out.push('\n');
    out
}

pub fn login(page: &LoginPage) -> String {
    let mut lines = vec![format!("E-mail: {}", page.email)];
    if let Some(error) = &page.error {
        lines.push(error_line(error));
    }
    lines.push(button(messages::LOGIN_ACTION, messages::LOGIN_BUSY, page.in_flight));
    card(messages::LOGIN_ACTION, &lines)
}

pub fn register(page: &RegisterPage) -> String {
    let mut lines = vec![
        format!("Nome: {}", page.name),
        format!("E-mail: {}", page.email),
        format!("Barbeiro: {}", if page.is_provider { "sim" } else { "não" }),
    ];
    if let Some(error) = &page.error {
        lines.push(error_line(error));
    }
    if let Some(success) = &page.success {
        lines.push(format!("✓ {}", success));
    }
    lines.push(button(messages::REGISTER_ACTION, messages::REGISTER_BUSY, page.in_flight));
    card(messages::REGISTER_ACTION, &lines)
}

fn booking_card(flow: &BookingFlow, tz: Tz) -> String {
    let mut lines = remote_lines(&flow.provider, |provider| {
        let mut lines = vec![format!("{}: {}", messages::PROVIDER_LABEL, provider.name)];
        lines.extend(list_or_empty(
            &provider.services,
            messages::NO_SERVICES,
            |service| {
                let marker = if flow.picker.service_id.as_deref() == Some(service.id.as_str()) {
                    "●"
                } else {
                    "○"
                };
                vec![format!("{} {}  ({})", marker, service_line(service), service.id)]
            },
        ));
        lines
    });
    lines.push(format!("Data: {}", flow.picker.date));

    lines.push(messages::AVAILABLE_SLOTS_TITLE.to_string());
    lines.extend(remote_lines(&flow.picker.slots, |slots| {
        if slots.is_empty() {
            vec![messages::NO_SLOTS.to_string()]
        } else {
            slot_lines(slots, tz)
        }
    }));
    if flow.picker.is_loading() {
        lines.push(button(messages::SLOTS_ACTION, messages::SLOTS_BUSY, true));
    }
    if let Some(feedback) = &flow.booking {
        lines.push(feedback_line(feedback));
    }
    if flow.booking_in_flight {
        lines.push(button(messages::BOOK_ACTION, messages::BOOK_BUSY, true));
    }
    card(messages::BOOKING_TITLE, &lines)
}

pub fn dashboard(page: &DashboardPage, tz: Tz) -> String {
    let mut out = String::new();
    if let Some(user) = &page.user {
        out.push_str(&format!("{}, {}\n", messages::GREETING, user.name));
    }
    if let Some(flow) = &page.booking {
        out.push_str(&booking_card(flow, tz));
    }
    let lines = remote_lines(&page.appointments, |appointments| {
        list_or_empty(appointments, messages::NO_APPOINTMENTS, |a| {
            customer_appointment(a, tz)
        })
    });
    out.push_str(&card(messages::APPOINTMENTS_TITLE, &lines));
    out
}

pub fn book(page: &BookPage, tz: Tz) -> String {
    let mut out = String::new();
    if let Some(flow) = &page.flow {
        out.push_str(&booking_card(flow, tz));
    }
    if !page.booked.is_empty() {
        let lines: Vec<String> = page
            .booked
            .iter()
            .flat_map(|a| customer_appointment(a, tz))
            .collect();
        out.push_str(&card(messages::APPOINTMENTS_TITLE, &lines));
    }
    out
}

pub fn provider_dashboard(page: &ProviderDashboardPage, tz: Tz) -> String {
    let mut out = String::new();
    if let Some(session) = &page.session {
        out.push_str(&format!(
            "{} · {}, {}\n",
            messages::PROVIDER_DASHBOARD_TITLE,
            messages::GREETING,
            session.user.name
        ));
    }

    let mut agenda = vec![format!("Data: {}", page.selected_date)];
    agenda.extend(remote_lines(&page.agenda, |appointments| {
        list_or_empty(appointments, messages::NO_AGENDA, |a| agenda_appointment(a, tz))
    }));
    out.push_str(&card(messages::AGENDA_TITLE, &agenda));

    let services = remote_lines(&page.services, |services| {
        list_or_empty(services, messages::NO_SERVICES, |s| vec![service_line(s)])
    });
    out.push_str(&card(messages::SERVICES_TITLE, &services));

    let mut availability = vec![weekday_row()];
    availability.extend(remote_lines(&page.availabilities, |items| {
        list_or_empty(items, messages::NO_AVAILABILITY, |a| vec![availability_line(a)])
    }));
    if let Some(feedback) = &page.availability_feedback {
        availability.push(feedback_line(feedback));
    }
    out.push_str(&card(messages::AVAILABILITY_TITLE, &availability));

    let mut blocks = remote_lines(&page.blocks, |items| {
        list_or_empty(items, messages::NO_BLOCKS, |b| block_lines(b, tz))
    });
    if let Some(feedback) = &page.block_feedback {
        blocks.push(feedback_line(feedback));
    }
    out.push_str(&card(messages::BLOCKS_TITLE, &blocks));
    out
}

pub fn provider_settings(page: &ProviderSettingsPage, tz: Tz) -> String {
    let mut out = format!("{}\n", messages::SETTINGS_TITLE);

    let mut limits = match page.config.error() {
        Some(error) => vec![error_line(error)],
        None => Vec::new(),
    };
    limits.push(format!(
        "{}: {}",
        messages::MAX_BOOKING_DAYS_LABEL,
        page.config_form.max_booking_days
    ));
    limits.push(format!(
        "{}: {}",
        messages::CANCEL_HOURS_LABEL,
        page.config_form.cancel_booking_hours
    ));
    if let Some(feedback) = &page.config_feedback {
        limits.push(feedback_line(feedback));
    }
    limits.push(button(messages::SAVE_ACTION, messages::SAVE_BUSY, page.config_in_flight));
    out.push_str(&card(messages::LIMITS_TITLE, &limits));

    let mut services = remote_lines(&page.services, |items| {
        list_or_empty(items, messages::NO_SERVICES, |s| {
            vec![format!("{}  ({})", service_line(s), s.id)]
        })
    });
    if let Some(feedback) = &page.services_feedback {
        services.push(feedback_line(feedback));
    }
    out.push_str(&card(messages::SERVICES_TITLE, &services));

    let selected = page
        .preview
        .service_id
        .as_deref()
        .and_then(|id| page.services.items().iter().find(|s| s.id == id));
    let mut preview = vec![
        format!(
            "Serviço: {}",
            selected.map(service_option).unwrap_or_else(|| "Selecione...".to_string())
        ),
        format!("Data: {}", page.preview.date),
    ];
    preview.extend(remote_lines(&page.preview.slots, |slots| {
        if slots.is_empty() {
            vec![messages::NO_SLOTS.to_string()]
        } else {
            slot_lines(slots, tz)
        }
    }));
    out.push_str(&card(messages::PREVIEW_TITLE, &preview));
    out
}
