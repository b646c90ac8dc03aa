use super::view_model::CheckinFormViewModel;
use crate::shared::config::use_config;
use crate::shared::form_validator::ValidatedField;
use crate::shared::format::{capitalize_words, format_aadhar};
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_checkin::numeric_mask_len;
use leptos::html;
use leptos::prelude::*;

const ROOM_LIST_ID: &str = "available-rooms";

#[component]
pub fn CheckinForm() -> impl IntoView {
    let config = use_config();
    let vm = CheckinFormViewModel::new(&config, use_notifications());
    vm.load_available_rooms();

    let validator = vm.validator;
    let full_name_ref = NodeRef::<html::Input>::new();

    // Text field bound to the view model by name
    let field = {
        let vm = vm.clone();
        move |name: &'static str| (vm.field(name), vm.setter(name))
    };

    let (full_name, set_full_name) = field("full_name");
    let (address, set_address) = field("address");
    let (area, set_area) = field("area");
    let (pincode, set_pincode) = field("pincode");
    let (aadhar, set_aadhar) = field("aadhar_number");
    let (mobile, set_mobile) = field("mobile_number");
    let (alt_mobile, set_alt_mobile) = field("alternate_mobile");
    let (email, set_email) = field("email");
    let (age, set_age) = field("age");
    let (children, set_children) = field("children_count");
    let (males, set_males) = field("male_count");
    let (females, set_females) = field("female_count");
    let (paid, set_paid) = field("amount_paid_today");
    let (remaining, set_remaining) = field("remaining_amount");
    let (room, set_room) = field("room_number");

    view! {
        <div class="details-container checkin-form">
            <div class="details-header">
                <h3>"Guest Check-in"</h3>
            </div>

            <form
                id="checkinForm"
                method="post"
                action="/checkin"
                novalidate=true
                on:submit={
                    let vm = vm.clone();
                    move |ev| vm.submit_command(ev)
                }
            >
                <fieldset class="form-section">
                    <legend>"Guest details"</legend>
                    <ValidatedField
                        validator=validator
                        name="full_name"
                        value=full_name
                        on_change=set_full_name
                        blur_transform=capitalize_words
                        node_ref=full_name_ref
                        placeholder="As on ID proof"
                    />
                    <ValidatedField
                        validator=validator
                        name="address"
                        value=address
                        on_change=set_address
                        multiline=true
                    />
                    <ValidatedField validator=validator name="area" value=area on_change=set_area />
                    <ValidatedField
                        validator=validator
                        name="pincode"
                        value=pincode
                        on_change=set_pincode
                        mask_len=numeric_mask_len("pincode")
                        placeholder="6 digits"
                    />
                    <ValidatedField
                        validator=validator
                        name="aadhar_number"
                        value=aadhar
                        on_change=set_aadhar
                        mask_len=numeric_mask_len("aadhar_number")
                        display_format=format_aadhar
                        placeholder="12 digits"
                    />
                    <ValidatedField
                        validator=validator
                        name="mobile_number"
                        value=mobile
                        on_change=set_mobile
                        input_type="tel"
                        mask_len=numeric_mask_len("mobile_number")
                        placeholder="10 digits"
                    />
                    <ValidatedField
                        validator=validator
                        name="alternate_mobile"
                        value=alt_mobile
                        on_change=set_alt_mobile
                        input_type="tel"
                        mask_len=numeric_mask_len("alternate_mobile")
                        placeholder="Optional"
                    />
                    <ValidatedField
                        validator=validator
                        name="email"
                        value=email
                        on_change=set_email
                        input_type="email"
                    />
                </fieldset>

                <fieldset class="form-section">
                    <legend>"Party"</legend>
                    <ValidatedField validator=validator name="age" value=age on_change=set_age input_type="number" />
                    <ValidatedField
                        validator=validator
                        name="children_count"
                        value=children
                        on_change=set_children
                        input_type="number"
                    />
                    <ValidatedField validator=validator name="male_count" value=males on_change=set_males input_type="number" />
                    <ValidatedField
                        validator=validator
                        name="female_count"
                        value=females
                        on_change=set_females
                        input_type="number"
                    />
                </fieldset>

                <fieldset class="form-section">
                    <legend>"Payment and room"</legend>
                    <ValidatedField
                        validator=validator
                        name="amount_paid_today"
                        value=paid
                        on_change=set_paid
                        input_type="number"
                    />
                    <ValidatedField
                        validator=validator
                        name="remaining_amount"
                        value=remaining
                        on_change=set_remaining
                        input_type="number"
                    />
                    {
                        let vm = vm.clone();
                        move || {
                            vm.total_label().map(|label| view! {
                                <div id="total-display" class="total-amount">
                                    <strong>{label}</strong>
                                </div>
                            })
                        }
                    }
                    <ValidatedField
                        validator=validator
                        name="room_number"
                        value=room
                        on_change=set_room
                        list=ROOM_LIST_ID
                    />
                    <datalist id=ROOM_LIST_ID>
                        <For
                            each={
                                let vm = vm.clone();
                                move || vm.available_rooms.get()
                            }
                            key=|n| *n
                            children=|n| view! { <option value=n.to_string()></option> }
                        />
                    </datalist>
                </fieldset>

                <div class="details-actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled={
                            let vm = vm.clone();
                            move || vm.submitting.get()
                        }
                    >
                        {
                            let vm = vm.clone();
                            move || if vm.submitting.get() { "Processing..." } else { "Check In" }
                        }
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click={
                            let vm = vm.clone();
                            move |_| vm.reset_command(full_name_ref)
                        }
                    >
                        "Reset"
                    </button>
                </div>
            </form>
        </div>
    }
}
