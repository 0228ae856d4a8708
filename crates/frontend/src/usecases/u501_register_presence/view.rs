use super::view_model::RegisterPresenceVm;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::enums::Sector;
use contracts::shared::cpf::CPF_DISPLAY_LEN;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_register_presence::RegisterPresence;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RegisterPresencePage(config: AppConfig) -> impl IntoView {
    let vm = RegisterPresenceVm::new(config);

    let formatted_cpf = vm.formatted_cpf();
    let is_loading = vm.is_loading();
    let can_select_sector = vm.can_select_sector();
    let can_select_function = vm.can_select_function();
    let has_sector = vm.has_sector();
    let is_loading_functions = vm.is_loading_functions();
    let selected_sector = vm.selected_sector();
    let selected_function = vm.selected_function();
    let functions = vm.functions();
    let worker = vm.worker();
    let cpf_error = vm.cpf_error();
    let sector_error = vm.sector_error();
    let function_error = vm.function_error();
    let submit_error = vm.submit_error();
    let success = vm.success();
    let blocked = vm.blocked();
    let notice = vm.notice();

    view! {
        <div id="u501_register_presence--usecase" class="register-presence">
            <Card>
                <div class="register-presence__header">
                    <h1>{RegisterPresence::display_name()}</h1>
                    <p>{RegisterPresence::description()}</p>
                </div>

                <div class="register-presence__body">
                    // CPF
                    <div class="form-group">
                        <label for="cpf">{icon("user")}" CPF "<span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="cpf"
                            inputmode="numeric"
                            autocomplete="off"
                            placeholder="Digite seu CPF"
                            maxlength=CPF_DISPLAY_LEN.to_string()
                            prop:value=move || formatted_cpf.get()
                            on:input=move |ev| vm.on_cpf_input(event_target_value(&ev))
                            on:blur=move |_| vm.on_cpf_blur()
                        />
                        {move || cpf_error.get().map(|e| view! {
                            <MessageBar intent=MessageBarIntent::Error>
                                <div class="message">{icon("alert")}<span>{e}</span></div>
                            </MessageBar>
                        })}
                    </div>

                    <Show when=move || is_loading.get()>
                        <div class="register-presence__loading">
                            <Spinner size=SpinnerSize::Small />
                            <span>"Processando..."</span>
                        </div>
                    </Show>

                    {move || worker.get().filter(|w| !w.registered_today).map(|w| view! {
                        <MessageBar intent=MessageBarIntent::Info>
                            <div class="worker-info">
                                <div><strong>"Nome: "</strong>{w.name}</div>
                                <div><strong>"Chave PIX: "</strong>{w.pix_key}</div>
                            </div>
                        </MessageBar>
                    })}

                    {move || notice.get().map(|n| view! {
                        <div class="register-presence__notice">{n}</div>
                    })}

                    {move || blocked.get().map(|msg| view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <div class="message">
                                {icon("alert")}
                                <span><strong>"⚠️ ATENÇÃO: "</strong>{msg}</span>
                            </div>
                        </MessageBar>
                    })}

                    // Sector
                    <div class="form-group">
                        <label for="sector">{icon("map-pin")}" Setor "<span class="required">"*"</span></label>
                        <select
                            id="sector"
                            prop:value=move || selected_sector.get()
                            prop:disabled=move || !can_select_sector.get()
                            on:change=move |ev| vm.on_sector_change(event_target_value(&ev))
                        >
                            <option value="">"Selecione um setor"</option>
                            {Sector::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </select>
                        {move || sector_error.get().map(|e| view! { <div class="field-error">{e}</div> })}
                    </div>

                    // Function
                    <div class="form-group">
                        <label for="function">{icon("briefcase")}" Função "<span class="required">"*"</span></label>
                        <select
                            id="function"
                            prop:value=move || selected_function.get()
                            prop:disabled=move || !can_select_function.get() || is_loading_functions.get()
                            on:change=move |ev| vm.on_function_change(event_target_value(&ev))
                        >
                            <option value="">
                                {move || {
                                    if !has_sector.get() {
                                        "Selecione o setor primeiro"
                                    } else if is_loading_functions.get() {
                                        "Carregando funções..."
                                    } else {
                                        "Selecione uma função"
                                    }
                                }}
                            </option>
                            <For
                                each=move || functions.get()
                                key=|f| f.clone()
                                children=move |f: String| {
                                    let label = f.clone();
                                    view! { <option value=f>{label}</option> }
                                }
                            />
                        </select>
                        {move || function_error.get().map(|e| view! { <div class="field-error">{e}</div> })}
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=vm.is_submit_disabled()
                        on_click=move |_| vm.submit_command()
                        attr:style="width: 100%; height: 48px;"
                    >
                        {move || if is_loading.get() {
                            view! { <Spinner size=SpinnerSize::Small /><span>" Processando..."</span> }.into_any()
                        } else {
                            view! { <span>"Registrar Presença"</span> }.into_any()
                        }}
                    </Button>

                    {move || success.get().map(|msg| view! {
                        <MessageBar intent=MessageBarIntent::Success>
                            <div class="message">{icon("check")}<span>{msg}</span></div>
                        </MessageBar>
                    })}

                    {move || submit_error.get().map(|msg| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <div class="message">{icon("alert")}<span>{msg}</span></div>
                        </MessageBar>
                    })}
                </div>
            </Card>
        </div>
    }
}
