//! ViewModel for the attendance form
//!
//! Owns the workflow in a signal, exposes derived signals for the view and
//! executes the commands the workflow emits (HTTP calls, banner timers).

use super::api;
use super::workflow::{Command, RegistrationWorkflow, WorkerRecord};
use crate::shared::config::AppConfig;
use contracts::enums::Sector;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct RegisterPresenceVm {
    pub workflow: RwSignal<RegistrationWorkflow>,
    config: StoredValue<AppConfig>,
    /// Pending banner dismissal. Replacing or clearing it cancels the timer.
    dismiss_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl RegisterPresenceVm {
    pub fn new(config: AppConfig) -> Self {
        Self {
            workflow: RwSignal::new(RegistrationWorkflow::new()),
            config: StoredValue::new(config),
            dismiss_timer: StoredValue::new_local(None),
        }
    }

    // === Derived signals ===

    pub fn formatted_cpf(&self) -> Signal<String> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.formatted_cpf()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.is_loading()))
    }

    pub fn is_submit_disabled(&self) -> Signal<bool> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.is_loading() || !w.is_form_valid()))
    }

    pub fn can_select_sector(&self) -> Signal<bool> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.can_select()))
    }

    pub fn can_select_function(&self) -> Signal<bool> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.can_select() && w.input().sector.is_some()))
    }

    pub fn is_loading_functions(&self) -> Signal<bool> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.is_loading_functions()))
    }

    pub fn has_sector(&self) -> Signal<bool> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.input().sector.is_some()))
    }

    pub fn selected_sector(&self) -> Signal<String> {
        let wf = self.workflow;
        Signal::derive(move || {
            wf.with(|w| w.input().sector.map(|s| s.code().to_string()).unwrap_or_default())
        })
    }

    pub fn selected_function(&self) -> Signal<String> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.input().function.clone()))
    }

    pub fn functions(&self) -> Signal<Vec<String>> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.functions().to_vec()))
    }

    pub fn worker(&self) -> Signal<Option<WorkerRecord>> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.worker().cloned()))
    }

    pub fn cpf_error(&self) -> Signal<Option<String>> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.errors().cpf.clone()))
    }

    pub fn sector_error(&self) -> Signal<Option<String>> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.errors().sector.clone()))
    }

    pub fn function_error(&self) -> Signal<Option<String>> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.errors().function.clone()))
    }

    pub fn submit_error(&self) -> Signal<Option<String>> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.errors().submit.clone()))
    }

    pub fn success(&self) -> Signal<Option<String>> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.success_message().map(str::to_string)))
    }

    pub fn blocked(&self) -> Signal<Option<String>> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.blocked_message().map(str::to_string)))
    }

    pub fn notice(&self) -> Signal<Option<String>> {
        let wf = self.workflow;
        Signal::derive(move || wf.with(|w| w.notice().map(str::to_string)))
    }

    // === Commands ===

    pub fn on_cpf_input(&self, raw: String) {
        self.apply(|wf| wf.identifier_changed(&raw));
    }

    pub fn on_cpf_blur(&self) {
        self.apply(|wf| wf.identifier_blurred());
    }

    pub fn on_sector_change(&self, code: String) {
        let sector = Sector::from_code(&code);
        self.apply(|wf| wf.sector_selected(sector));
    }

    pub fn on_function_change(&self, value: String) {
        self.apply(|wf| wf.function_selected(&value));
    }

    pub fn submit_command(&self) {
        self.apply(|wf| wf.submit());
    }

    /// Feed one event to the workflow and run whatever it asks for
    fn apply(&self, event: impl FnOnce(&mut RegistrationWorkflow) -> Vec<Command>) {
        // None when the page is already unmounted
        let commands = self.workflow.try_update(event).unwrap_or_default();
        self.dispatch(commands);
    }

    fn dispatch(&self, commands: Vec<Command>) {
        for command in commands {
            let vm = *self;
            match command {
                Command::CheckRegistration { ticket, cpf } => {
                    let config = self.config.get_value();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = api::check_registration(&config, &cpf).await;
                        vm.apply(|wf| wf.lookup_completed(ticket, result));
                    });
                }
                Command::FetchFunctions { ticket, sector } => {
                    let config = self.config.get_value();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = api::fetch_functions(&config, sector).await;
                        vm.apply(|wf| wf.functions_loaded(ticket, result));
                    });
                }
                Command::RegisterPresence { ticket, request } => {
                    let config = self.config.get_value();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = api::register_presence(&config, &request).await;
                        vm.apply(|wf| wf.register_completed(ticket, result));
                    });
                }
                Command::ScheduleDismiss { ticket, after } => {
                    let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
                    let timeout = Timeout::new(millis, move || {
                        vm.apply(|wf| wf.banner_dismissed(ticket));
                    });
                    // dropping the previous handle cancels it
                    self.dismiss_timer.set_value(Some(timeout));
                }
                Command::CancelDismiss => {
                    self.dismiss_timer.set_value(None);
                }
            }
        }
    }
}
