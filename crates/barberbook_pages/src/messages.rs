// --- File: crates/barberbook_pages/src/messages.rs ---

//! User-facing text (pt-BR).

pub const LOADING: &str = "Carregando...";
pub const REDIRECTING: &str = "Redirecionando...";

// Login / register
pub const LOGIN_FAILED: &str = "Falha ao entrar";
pub const LOGIN_BUSY: &str = "Entrando...";
pub const LOGIN_ACTION: &str = "Entrar";
pub const REGISTER_FAILED: &str = "Erro ao registrar";
pub const REGISTER_SUCCESS: &str = "Registrado com sucesso! Indo para login...";
pub const REGISTER_BUSY: &str = "Registrando...";
pub const REGISTER_ACTION: &str = "Registrar";
pub const SESSION_SAVE_FAILED: &str = "Não foi possível salvar a sessão";
pub const LOGOUT_FAILED: &str = "Não foi possível encerrar a sessão";

// Booking
pub const LOAD_PROVIDER_FAILED: &str = "Erro ao carregar barbeiro";
pub const NO_PROVIDER: &str = "Nenhum barbeiro cadastrado.";
pub const PROVIDER_NOT_FOUND: &str = "Barbeiro não encontrado";
pub const SELECT_SERVICE_AND_DATE: &str = "Selecione serviço e data";
pub const LOAD_SLOTS_FAILED: &str = "Erro ao carregar horários";
pub const SLOTS_BUSY: &str = "Carregando horários...";
pub const SLOTS_ACTION: &str = "Ver horários disponíveis";
pub const NO_SLOTS: &str = "Nenhum horário disponível para este dia.";
pub const BOOKING_CREATED: &str = "Agendamento criado com sucesso!";
pub const BOOKING_FAILED: &str = "Erro ao criar agendamento";
pub const LOAD_APPOINTMENTS_FAILED: &str = "Erro ao carregar agendamentos";
pub const NO_APPOINTMENTS: &str = "Você ainda não tem agendamentos.";

/// Server texts that mean the chosen slot was taken meanwhile.
pub const CONFLICT_MARKERS: [&str; 2] = ["já existe um agendamento", "an appointment already exists"];

// Provider dashboard
pub const LOAD_AGENDA_FAILED: &str = "Erro ao carregar agenda";
pub const NO_AGENDA: &str = "Nenhum agendamento para este dia.";
pub const LOAD_AVAILABILITY_FAILED: &str = "Erro ao carregar disponibilidades";
pub const AVAILABILITY_CREATED: &str = "Disponibilidade criada!";
pub const AVAILABILITY_CREATE_FAILED: &str = "Erro ao criar disponibilidade";
pub const AVAILABILITY_REMOVED: &str = "Disponibilidade removida!";
pub const AVAILABILITY_REMOVE_FAILED: &str = "Erro ao remover disponibilidade";
pub const LOAD_BLOCKS_FAILED: &str = "Erro ao carregar bloqueios";
pub const BLOCK_CREATED: &str = "Bloqueio criado!";
pub const BLOCK_CREATE_FAILED: &str = "Erro ao criar bloqueio";
pub const BLOCK_DEFAULT_REASON: &str = "Bloqueio";

// Provider settings
pub const LOAD_CONFIG_FAILED: &str = "Erro ao carregar configuração";
pub const CONFIG_SAVED: &str = "Configurações atualizadas!";
pub const CONFIG_SAVE_FAILED: &str = "Erro ao salvar configuração";
pub const LOAD_SERVICES_FAILED: &str = "Erro ao carregar serviços";
pub const SERVICE_CREATED: &str = "Serviço criado!";
pub const SERVICE_CREATE_FAILED: &str = "Erro ao criar serviço";
pub const SERVICE_REMOVED: &str = "Serviço removido!";
pub const SERVICE_REMOVE_FAILED: &str = "Erro ao remover serviço";
pub const SERVICE_DEFAULT_NAME: &str = "Serviço";

// Headings and empty states
pub const GREETING: &str = "Olá";
pub const BOOKING_TITLE: &str = "Agendar novo horário";
pub const APPOINTMENTS_TITLE: &str = "Meus agendamentos";
pub const AVAILABLE_SLOTS_TITLE: &str = "Horários disponíveis";
pub const PROVIDER_DASHBOARD_TITLE: &str = "Painel do barbeiro";
pub const AGENDA_TITLE: &str = "Agenda do dia";
pub const SERVICES_TITLE: &str = "Serviços";
pub const NO_SERVICES: &str = "Nenhum serviço cadastrado.";
pub const AVAILABILITY_TITLE: &str = "Disponibilidades semanais";
pub const NO_AVAILABILITY: &str = "Nenhuma disponibilidade cadastrada ainda.";
pub const BLOCKS_TITLE: &str = "Bloqueios";
pub const NO_BLOCKS: &str = "Nenhum bloqueio cadastrado.";
pub const SETTINGS_TITLE: &str = "Configurações do barbeiro";
pub const LIMITS_TITLE: &str = "Limites";
pub const MAX_BOOKING_DAYS_LABEL: &str = "Máximo de dias à frente";
pub const CANCEL_HOURS_LABEL: &str = "Cancelamento permitido até (horas antes)";
pub const PREVIEW_TITLE: &str = "Preview de horários disponíveis";
pub const PROVIDER_LABEL: &str = "Barbeiro";
pub const CUSTOMER_LABEL: &str = "Cliente";
pub const NOTES_LABEL: &str = "Obs";
pub const SAVE_ACTION: &str = "Salvar";
pub const SAVE_BUSY: &str = "Salvando...";
pub const BOOK_ACTION: &str = "Agendar";
pub const BOOK_BUSY: &str = "Agendando...";

// Navigation
pub const NAV_BRAND: &str = "Barber Admin";
pub const NAV_PROVIDER_DASHBOARD: &str = "Painel do barbeiro";
pub const NAV_PROVIDER_SETTINGS: &str = "Configurações";
pub const NAV_MY_APPOINTMENTS: &str = "Meus agendamentos";
pub const NAV_LOGOUT: &str = "Sair";
pub const NAV_LOGIN: &str = "Entrar";

/// Weekday labels indexed by `weekday` (0 = Sunday).
pub const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

pub fn weekday_label(weekday: u8) -> &'static str {
    WEEKDAY_LABELS
        .get(usize::from(weekday))
        .copied()
        .unwrap_or("?")
}
