//! Enquiry form ("Book Your Order").
//!
//! Field edits, validation and the submit lifecycle live in
//! [`cakes_core::LeadForm`]; this component binds it to inputs and hands
//! submissions to [`EnquiryService`].

use cakes_core::{submit_lead, LeadField, LeadForm, LeadFormHandle};
use leptos::ev::SubmitEvent;
use leptos::*;
use web_sys::Event;

use crate::components::Toasts;
use crate::config::{CONTACT_PHONE, CONTACT_SECTION_ID};
use crate::services::EnquiryService;

/// Form state held in a signal.
#[derive(Clone, Copy)]
struct FormSignal(RwSignal<LeadForm>);

impl LeadFormHandle for FormSignal {
    fn update_form<R>(&self, f: impl FnOnce(&mut LeadForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = create_rw_signal(LeadForm::new());
    let toasts = Toasts::from_context();
    let service = store_value(EnquiryService::default());

    let is_submitting = move || form.with(|f| f.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Locks the form before anything is spawned.
        let pending = submit_lead(FormSignal(form), service.get_value(), toasts);
        spawn_local(async move {
            let _ = pending.await;
        });
    };

    view! {
        <section class="contact" id=CONTACT_SECTION_ID>
            <div class="contact-inner reveal">
                <div class="contact-header">
                    <h2>"Book Your Order"</h2>
                    <p class="contact-intro">
                        "Have a special occasion? Let us create the perfect cake for you. "
                        "Fill out the form below and we'll get back to you shortly."
                    </p>
                    <a href=format!("tel:{}", CONTACT_PHONE) class="contact-phone">
                        "📞 Call us: " {CONTACT_PHONE}
                    </a>
                </div>

                <form class="contact-form" on:submit=on_submit novalidate=true>
                    <FormField form=form field=LeadField::Name label="Name" icon="👤"
                        input_type="text" placeholder="Your full name"/>
                    <FormField form=form field=LeadField::Phone label="Phone Number" icon="📞"
                        input_type="tel" placeholder="Your phone number"/>
                    <FormField form=form field=LeadField::Email label="Email" icon="✉️"
                        input_type="email" placeholder="your@email.com"/>
                    <FormField form=form field=LeadField::Message label="Message" icon="💬"
                        placeholder="Tell us about your cake requirements, occasion, date, etc."
                        multiline=true/>

                    <button type="submit" class="btn-submit" disabled=is_submitting>
                        {move || if is_submitting() {
                            view! {
                                <span class="btn-label">
                                    <span class="spinner">"⏳"</span>
                                    "Sending..."
                                </span>
                            }
                        } else {
                            view! {
                                <span class="btn-label">
                                    <span class="btn-icon">"➤"</span>
                                    "Book Enquiry"
                                </span>
                            }
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}

/// One labelled input bound to a form field.
#[component]
fn FormField(
    form: RwSignal<LeadForm>,
    field: LeadField,
    label: &'static str,
    icon: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let key = field.key();
    let max_len = field.max_len().to_string();
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: Event| {
        let typed = event_target_value(&ev);
        form.update(|f| f.set_field(field, &typed));
    };

    let input = if multiline {
        view! {
            <textarea
                id=key
                name=key
                rows="5"
                placeholder=placeholder
                maxlength=max_len
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                id=key
                name=key
                type=input_type
                placeholder=placeholder
                maxlength=max_len
                prop:value=value
                on:input=on_input
            />
        }
        .into_view()
    };

    view! {
        <div class="form-field">
            <label for=key>
                <span class="field-icon">{icon}</span>
                {label}
                {field.is_required().then(|| view! { <span class="required">" *"</span> })}
            </label>
            {input}
        </div>
    }
}
