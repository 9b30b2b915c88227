//! Main interactive loop: one iteration renders the active screen and runs
//! exactly one user action against the application state.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::app::{AppState, Screen, SystemClock};
use crate::cli::{render, CliError, PathImagePicker, TerminalNotifier};
use crate::config::Config;
use crate::rides::{PaymentMethod, SortOrder, TimeWindow};

pub struct Shell {
    state: AppState,
    config: Config,
    theme: ColorfulTheme,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        let mut state = AppState::new(Box::new(TerminalNotifier), Box::new(SystemClock));
        state.set_payment_method(config.default_payment_method);
        Self {
            state,
            config,
            theme: ColorfulTheme::default(),
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        println!("{}", "Welcome to Taxi Diary".bold());
        loop {
            match self.state.navigator().screen() {
                Screen::Home => {
                    if !self.home_screen()? {
                        return Ok(());
                    }
                }
                Screen::RegisterRide => self.register_screen()?,
                Screen::RideRecords => self.records_screen()?,
                Screen::Driver => self.driver_screen()?,
            }
        }
    }

    fn home_screen(&mut self) -> Result<bool, CliError> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Home")
            .items(&["Register ride", "Ride records", "Driver", "Quit"])
            .default(0)
            .interact()?;
        match choice {
            0 => self.state.open_screen(Screen::RegisterRide),
            1 => self.state.open_screen(Screen::RideRecords),
            2 => self.state.open_screen(Screen::Driver),
            _ => return Ok(false),
        };
        Ok(true)
    }

    fn register_screen(&mut self) -> Result<(), CliError> {
        let title = if self.state.draft().is_editing() {
            "Edit ride"
        } else {
            "Register ride"
        };
        println!("{}", title.bold().underline());
        let pickup = self.text_field("Pickup location", &self.state.draft().pickup_location)?;
        self.state.set_pickup_location(pickup);
        let dropoff = self.text_field("Drop-off location", &self.state.draft().dropoff_location)?;
        self.state.set_dropoff_location(dropoff);
        let payment = self.payment_choice(self.state.draft().payment_method)?;
        self.state.set_payment_method(payment);
        let passenger = self.text_field("Passenger name", &self.state.draft().passenger_name)?;
        self.state.set_passenger_name(passenger);
        let fare = self.text_field("Fare amount", &self.state.draft().fare_amount)?;
        self.state.set_fare_amount(fare);

        let mut actions = vec!["Submit"];
        if self.state.draft().payment_method == PaymentMethod::Pix {
            actions.push("Show PIX QR code");
        }
        actions.push("Back");
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;
        match actions[choice] {
            "Submit" => {
                // A successful submit navigates home by itself.
                self.state.submit_ride();
            }
            "Show PIX QR code" => {
                if self.state.open_qr_viewer() {
                    render::print_qr_viewer(self.state.profile());
                    self.state.close_qr_viewer();
                }
            }
            _ => self.state.go_home(),
        }
        Ok(())
    }

    fn records_screen(&mut self) -> Result<(), CliError> {
        {
            let view = self.state.visible_rides();
            render::print_ride_list(&view, self.state.selection(), &self.config);
        }
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Ride records")
            .items(&["Filter", "Edit ride", "Delete ride", "Back"])
            .default(0)
            .interact()?;
        match choice {
            0 => self.filter_panel()?,
            1 => {
                let id = self.ride_id_field("Ride id to edit")?;
                if self.state.edit_ride(id) {
                    // Edit-then-resubmit happens on the register screen.
                    self.state.go_home();
                    self.state.open_screen(Screen::RegisterRide);
                } else {
                    println!("{}", "No ride with that id.".dimmed());
                }
            }
            2 => {
                let id = self.ride_id_field("Ride id to delete")?;
                self.state.delete_ride(id);
            }
            _ => self.state.go_home(),
        }
        Ok(())
    }

    fn filter_panel(&mut self) -> Result<(), CliError> {
        if !self.state.open_filter_panel() {
            return Ok(());
        }
        loop {
            let mut items: Vec<String> = vec![
                "Filter by PIX".into(),
                "Filter by Cash".into(),
                "Clear filter".into(),
                "Sort by most recent".into(),
                "Sort by oldest".into(),
            ];
            items.extend(
                TimeWindow::ALL
                    .iter()
                    .map(|window| format!("Window: {}", window.label().to_lowercase())),
            );
            items.push("Close".into());
            let choice = Select::with_theme(&self.theme)
                .with_prompt("Filter")
                .items(&items)
                .default(items.len() - 1)
                .interact()?;
            match choice {
                0 => self.state.set_payment_filter(Some(PaymentMethod::Pix)),
                1 => self.state.set_payment_filter(Some(PaymentMethod::Cash)),
                2 => self.state.set_payment_filter(None),
                3 => self.state.set_sort_order(SortOrder::MostRecentFirst),
                4 => self.state.set_sort_order(SortOrder::OldestFirst),
                i if i < 5 + TimeWindow::ALL.len() => {
                    self.state.set_time_window(TimeWindow::ALL[i - 5]);
                }
                _ => break,
            }
        }
        self.state.close_filter_panel();
        Ok(())
    }

    fn driver_screen(&mut self) -> Result<(), CliError> {
        render::print_profile(self.state.profile());
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Driver")
            .items(&["Edit information", "Show PIX QR code", "Back"])
            .default(0)
            .interact()?;
        match choice {
            0 => self.driver_editor()?,
            1 => {
                if self.state.open_qr_viewer() {
                    render::print_qr_viewer(self.state.profile());
                    self.state.close_qr_viewer();
                }
            }
            _ => self.state.go_home(),
        }
        Ok(())
    }

    fn driver_editor(&mut self) -> Result<(), CliError> {
        if !self.state.open_driver_editor() {
            return Ok(());
        }
        loop {
            let name = self.text_field("Name", &self.state.profile_draft().full_name)?;
            self.state.set_driver_name(name);
            let taxpayer = self.text_field("Taxpayer id", &self.state.profile_draft().taxpayer_id)?;
            self.state.set_driver_taxpayer_id(taxpayer);
            let birth = self.text_field("Birth date", &self.state.profile_draft().birth_date)?;
            self.state.set_driver_birth_date(birth);
            let pix = self.text_field("PIX key", &self.state.profile_draft().pix_key)?;
            self.state.set_driver_pix_key(pix);

            let choice = Select::with_theme(&self.theme)
                .with_prompt("Driver editor")
                .items(&["Pick QR code", "Save", "Cancel"])
                .default(1)
                .interact()?;
            match choice {
                0 => {
                    let mut picker = PathImagePicker;
                    self.state.pick_qr_code(&mut picker);
                }
                1 => {
                    if self.state.save_driver_info() {
                        break;
                    }
                    // Validation failed, stay in the editor.
                }
                _ => {
                    self.state.cancel_driver_editor();
                    break;
                }
            }
        }
        Ok(())
    }

    fn text_field(&self, prompt: &str, current: &str) -> Result<String, CliError> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn ride_id_field(&self, prompt: &str) -> Result<u64, CliError> {
        let value: u64 = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok(value)
    }

    fn payment_choice(&self, current: PaymentMethod) -> Result<PaymentMethod, CliError> {
        let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.label()).collect();
        let default = PaymentMethod::ALL
            .iter()
            .position(|m| *m == current)
            .unwrap_or(0);
        let choice = Select::with_theme(&self.theme)
            .with_prompt("Payment method")
            .items(&labels)
            .default(default)
            .interact()?;
        Ok(PaymentMethod::ALL[choice])
    }
}
