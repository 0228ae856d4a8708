//! Registration workflow state machine
//!
//! Synchronous and deterministic: user events and request completions go in,
//! [`Command`]s for the view model come out. Every issued request carries a
//! [`Ticket`]; a completion is applied only when its ticket is still the
//! latest one issued on that channel, otherwise it is dropped.

use contracts::enums::Sector;
use contracts::shared::api_error::ApiError;
use contracts::shared::cpf::{self, Cpf, CPF_LEN};
use contracts::usecases::u501_register_presence::{
    CheckRegistrationResponse, RegisterPresenceRequest, RegisterPresenceResponse,
};
use std::time::Duration;

/// How long the success banner stays on screen
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(5);
/// How long the submit-level error banner stays on screen
pub const ERROR_BANNER_TTL: Duration = Duration::from_secs(7);

const MSG_NOT_FOUND: &str = "CPF não encontrado. Verifique ou cadastre-se.";
const MSG_NOT_REGISTERED: &str = "CPF não cadastrado";
const MSG_LOOKUP_FAILED: &str = "Erro ao buscar dados";
const MSG_REGISTER_FAILED: &str = "Erro no registro";
const MSG_REGISTERED: &str = "Presença registrada";
const MSG_SECTOR_REQUIRED: &str = "Selecione um setor";
const MSG_FUNCTION_REQUIRED: &str = "Selecione uma função";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Editing,
    Checking,
    CheckedAvailable,
    CheckedBlocked,
    CheckedNotFound,
    Submitting,
    Done,
    SubmitError,
}

/// Sequence number of an issued request or a scheduled banner dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Side effect requested by the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CheckRegistration { ticket: Ticket, cpf: Cpf },
    FetchFunctions { ticket: Ticket, sector: Sector },
    RegisterPresence { ticket: Ticket, request: RegisterPresenceRequest },
    /// Call [`RegistrationWorkflow::banner_dismissed`] after `after`.
    /// Replaces any previously scheduled dismissal.
    ScheduleDismiss { ticket: Ticket, after: Duration },
    /// Drop the pending dismissal without running it
    CancelDismiss,
}

/// User-entered values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    /// Bare digits, at most 11
    pub cpf: String,
    pub sector: Option<Sector>,
    /// Selected role, empty when none
    pub function: String,
}

/// Worker as returned by a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerRecord {
    pub name: String,
    pub pix_key: String,
    pub registered_today: bool,
    pub last_registration_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Cpf,
    Sector,
    Function,
    Submit,
}

/// Per-field messages shown under the inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub cpf: Option<String>,
    pub sector: Option<String>,
    pub function: Option<String>,
    pub submit: Option<String>,
}

impl ValidationErrors {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Cpf => &mut self.cpf,
            Field::Sector => &mut self.sector,
            Field::Function => &mut self.function,
            Field::Submit => &mut self.submit,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Cpf => self.cpf.as_deref(),
            Field::Sector => self.sector.as_deref(),
            Field::Function => self.function.as_deref(),
            Field::Submit => self.submit.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationWorkflow {
    state: WorkflowState,
    input: FormInput,
    worker: Option<WorkerRecord>,
    errors: ValidationErrors,
    /// Blocking banner: unknown CPF or already registered today
    blocked: Option<String>,
    /// Informational text from the lookup (e.g. registration window closed)
    notice: Option<String>,
    success: Option<String>,
    functions: Vec<String>,

    last_ticket: u64,
    pending_check: Option<Ticket>,
    pending_functions: Option<Ticket>,
    pending_register: Option<Ticket>,
    banner: Option<Ticket>,
}

impl Default for RegistrationWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWorkflow {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::Editing,
            input: FormInput::default(),
            worker: None,
            errors: ValidationErrors::default(),
            blocked: None,
            notice: None,
            success: None,
            functions: Vec::new(),
            last_ticket: 0,
            pending_check: None,
            pending_functions: None,
            pending_register: None,
            banner: None,
        }
    }

    // === Read access ===

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// CPF with the display mask applied
    pub fn formatted_cpf(&self) -> String {
        cpf::format(&self.input.cpf)
    }

    pub fn worker(&self) -> Option<&WorkerRecord> {
        self.worker.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn blocked_message(&self) -> Option<&str> {
        self.blocked.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Roles available for the selected sector
    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    /// A lookup or a registration is in flight
    pub fn is_loading(&self) -> bool {
        self.pending_check.is_some() || self.pending_register.is_some()
    }

    pub fn is_loading_functions(&self) -> bool {
        self.pending_functions.is_some()
    }

    /// Sector and role dropdowns are enabled
    pub fn can_select(&self) -> bool {
        !self.is_loading() && self.worker.as_ref().is_some_and(|w| !w.registered_today)
    }

    pub fn is_form_valid(&self) -> bool {
        self.input.cpf.len() == CPF_LEN
            && cpf::validate(&self.input.cpf).is_ok()
            && self.errors.cpf.is_none()
            && self.input.sector.is_some()
            && !self.input.function.is_empty()
            && !self.is_loading()
            && self.worker.as_ref().is_some_and(|w| !w.registered_today)
    }

    // === Events ===

    /// The CPF field changed. `raw` is whatever the input holds, mask included.
    pub fn identifier_changed(&mut self, raw: &str) -> Vec<Command> {
        let digits = cpf::normalize(raw);
        if digits == self.input.cpf {
            return Vec::new();
        }

        self.input.cpf = digits;
        self.errors.clear(Field::Cpf);
        self.worker = None;
        self.blocked = None;
        self.notice = None;
        if let Some(stale) = self.pending_check.take() {
            log::debug!("CPF changed, check {:?} will be ignored", stale);
        }
        if let Some(stale) = self.pending_register.take() {
            log::warn!("CPF changed during submission, register {:?} will be ignored", stale);
        }
        self.state = WorkflowState::Editing;

        if self.input.cpf.len() < CPF_LEN {
            return Vec::new();
        }
        self.start_check()
    }

    /// The CPF field lost focus. Retries the lookup after a transport failure.
    pub fn identifier_blurred(&mut self) -> Vec<Command> {
        let retry = self.state == WorkflowState::Editing
            && self.input.cpf.len() == CPF_LEN
            && self.errors.cpf.is_none()
            && self.worker.is_none()
            && self.pending_check.is_none();
        if !retry {
            return Vec::new();
        }
        log::debug!("Retrying lookup on blur");
        self.start_check()
    }

    pub fn lookup_completed(
        &mut self,
        ticket: Ticket,
        result: Result<CheckRegistrationResponse, ApiError>,
    ) -> Vec<Command> {
        if self.pending_check != Some(ticket) {
            log::debug!("Discarding stale check response {:?}", ticket);
            return Vec::new();
        }
        self.pending_check = None;

        match result {
            Ok(resp) if !resp.exists => {
                log::info!("CPF not found in collaborators");
                self.worker = None;
                self.notice = None;
                self.errors.set(Field::Cpf, MSG_NOT_FOUND);
                self.blocked = Some(MSG_NOT_REGISTERED.to_string());
                self.state = WorkflowState::CheckedNotFound;
                Vec::new()
            }
            Ok(resp) => {
                let record = WorkerRecord {
                    name: resp.name.unwrap_or_default(),
                    pix_key: resp.pix_key.unwrap_or_default(),
                    registered_today: resp.registered_today,
                    last_registration_time: resp.last_registration_time,
                };
                if record.registered_today {
                    log::info!("Worker already registered today");
                    self.blocked = Some(already_registered_message(&record));
                    self.notice = None;
                    self.state = WorkflowState::CheckedBlocked;
                } else {
                    self.blocked = None;
                    self.notice = resp.message.filter(|m| !m.trim().is_empty());
                    self.state = WorkflowState::CheckedAvailable;
                }
                self.worker = Some(record);
                Vec::new()
            }
            Err(err) => {
                log::error!("Check registration failed: {}", err);
                self.worker = None;
                self.state = WorkflowState::Editing;
                vec![self.show_submit_error(err.user_message(MSG_LOOKUP_FAILED))]
            }
        }
    }

    /// A sector was picked (or cleared). The role always resets.
    pub fn sector_selected(&mut self, sector: Option<Sector>) -> Vec<Command> {
        if !self.can_select() {
            log::debug!("Sector change ignored in state {:?}", self.state);
            return Vec::new();
        }

        self.input.sector = sector;
        self.input.function.clear();
        self.functions.clear();
        self.errors.clear(Field::Sector);
        self.errors.clear(Field::Function);
        self.pending_functions = None;

        match sector {
            Some(sector) => {
                let ticket = self.issue();
                self.pending_functions = Some(ticket);
                vec![Command::FetchFunctions { ticket, sector }]
            }
            None => Vec::new(),
        }
    }

    /// Role list for the selected sector arrived. Failures are not fatal.
    pub fn functions_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<String>, ApiError>,
    ) -> Vec<Command> {
        if self.pending_functions != Some(ticket) {
            log::debug!("Discarding stale role list {:?}", ticket);
            return Vec::new();
        }
        self.pending_functions = None;

        match result {
            Ok(list) => self.functions = list,
            Err(err) => {
                log::warn!("Failed to load roles: {}", err);
                self.functions.clear();
            }
        }
        Vec::new()
    }

    pub fn function_selected(&mut self, function: &str) -> Vec<Command> {
        if !self.can_select() || self.input.sector.is_none() {
            return Vec::new();
        }
        if function.is_empty() {
            self.input.function.clear();
            return Vec::new();
        }
        if !self.functions.iter().any(|f| f == function) {
            log::debug!("Role '{}' is not offered for the selected sector", function);
            return Vec::new();
        }
        self.input.function = function.to_string();
        self.errors.clear(Field::Function);
        Vec::new()
    }

    pub fn submit(&mut self) -> Vec<Command> {
        if !self.is_form_valid() {
            if self.can_select() {
                if self.input.sector.is_none() {
                    self.errors.set(Field::Sector, MSG_SECTOR_REQUIRED);
                }
                if self.input.function.is_empty() {
                    self.errors.set(Field::Function, MSG_FUNCTION_REQUIRED);
                }
            }
            log::debug!("Submit ignored, form not valid in state {:?}", self.state);
            return Vec::new();
        }
        let Some(sector) = self.input.sector else {
            return Vec::new();
        };
        let Ok(cpf) = Cpf::parse(&self.input.cpf) else {
            return Vec::new();
        };

        let mut commands = Vec::new();
        self.errors.clear_all();
        self.success = None;
        if self.banner.take().is_some() {
            commands.push(Command::CancelDismiss);
        }

        let ticket = self.issue();
        self.pending_register = Some(ticket);
        self.state = WorkflowState::Submitting;
        commands.push(Command::RegisterPresence {
            ticket,
            request: RegisterPresenceRequest::new(cpf, sector, self.input.function.clone()),
        });
        commands
    }

    pub fn register_completed(
        &mut self,
        ticket: Ticket,
        result: Result<RegisterPresenceResponse, ApiError>,
    ) -> Vec<Command> {
        if self.pending_register != Some(ticket) {
            log::debug!("Discarding stale register response {:?}", ticket);
            return Vec::new();
        }
        self.pending_register = None;

        match result {
            Ok(resp) => {
                log::info!("Attendance registered");
                self.reset_form();
                self.state = WorkflowState::Done;
                vec![self.show_success(success_message(&resp))]
            }
            Err(err) => {
                // The backend decides duplicates; keep the input for a retry.
                if err.status() == Some(409) {
                    log::warn!("Register presence refused as duplicate: {}", err);
                } else {
                    log::error!("Register presence failed: {}", err);
                }
                self.state = WorkflowState::SubmitError;
                vec![self.show_submit_error(err.user_message(MSG_REGISTER_FAILED))]
            }
        }
    }

    /// Timer for a banner fired
    pub fn banner_dismissed(&mut self, ticket: Ticket) -> Vec<Command> {
        if self.banner != Some(ticket) {
            return Vec::new();
        }
        self.banner = None;
        self.success = None;
        self.errors.clear(Field::Submit);
        Vec::new()
    }

    // === Internals ===

    fn issue(&mut self) -> Ticket {
        self.last_ticket += 1;
        Ticket(self.last_ticket)
    }

    fn start_check(&mut self) -> Vec<Command> {
        match Cpf::parse(&self.input.cpf) {
            Err(err) => {
                self.errors.set(Field::Cpf, err.to_string());
                self.state = WorkflowState::Editing;
                Vec::new()
            }
            Ok(cpf) => {
                let ticket = self.issue();
                self.pending_check = Some(ticket);
                self.state = WorkflowState::Checking;
                log::debug!("Checking registration for {}", cpf);
                vec![Command::CheckRegistration { ticket, cpf }]
            }
        }
    }

    fn show_success(&mut self, message: String) -> Command {
        self.errors.clear(Field::Submit);
        self.success = Some(message);
        self.schedule_dismiss(SUCCESS_BANNER_TTL)
    }

    fn show_submit_error(&mut self, message: String) -> Command {
        self.success = None;
        self.errors.set(Field::Submit, message);
        self.schedule_dismiss(ERROR_BANNER_TTL)
    }

    fn schedule_dismiss(&mut self, after: Duration) -> Command {
        let ticket = self.issue();
        self.banner = Some(ticket);
        Command::ScheduleDismiss { ticket, after }
    }

    fn reset_form(&mut self) {
        self.input = FormInput::default();
        self.worker = None;
        self.functions.clear();
        self.errors.clear_all();
        self.blocked = None;
        self.notice = None;
        self.pending_check = None;
        self.pending_functions = None;
    }
}

/// "✅ <server message> (<name>)", with a local default for an empty message
fn success_message(resp: &RegisterPresenceResponse) -> String {
    let message = match resp.message.trim() {
        "" => MSG_REGISTERED,
        text => text,
    };
    match resp.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!("✅ {} ({})", message, name),
        _ => format!("✅ {}", message),
    }
}

fn already_registered_message(record: &WorkerRecord) -> String {
    let who = if record.name.trim().is_empty() {
        "CPF"
    } else {
        record.name.as_str()
    };
    match record.last_registration_time.as_deref() {
        Some(time) if !time.trim().is_empty() => {
            format!("{} já registrado hoje às {}", who, time)
        }
        _ => format!("{} já registrado hoje", who),
    }
}
