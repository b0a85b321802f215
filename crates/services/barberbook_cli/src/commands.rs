use barberbook_pages::{
    BlockForm, BookPage, DashboardPage, Feedback, HomePage, LoginPage, Navbar, Navigation,
    PageContext, ProviderDashboardPage, ProviderSettingsPage, RegisterPage, Route, SlotPicker,
};
use chrono_tz::Tz;
use tracing::info;

use crate::cli::{
    AvailabilityCommands, BlockCommands, Commands, ConfigCommands, ProviderCommands,
    ServiceCommands, SlotArgs,
};
use crate::render;
use crate::views;

/// Redirect chains longer than this are cut off.
const MAX_REDIRECTS: usize = 4;

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The backend (or a page guard) turned the action down.
    Rejected,
}

impl Outcome {
    fn from_feedback(feedback: Option<&Feedback>) -> Self {
        match feedback {
            Some(feedback) if feedback.is_error() => Outcome::Rejected,
            _ => Outcome::Done,
        }
    }
}

/// Plays the browser: mounts page controllers for commands and prints them.
pub struct Shell {
    ctx: PageContext,
    zone: Tz,
}

fn apply_selection(picker: &mut SlotPicker, selection: &SlotArgs) {
    if let Some(service) = &selection.service {
        picker.select_service(Some(service.clone()));
    }
    if let Some(date) = &selection.date {
        picker.set_date(date.clone());
    }
}

impl Shell {
    pub fn new(ctx: PageContext) -> Self {
        let zone = ctx.zone;
        Self { ctx, zone }
    }

    pub async fn run(&self, command: Commands) -> Outcome {
        match command {
            Commands::Home => {
                let nav = HomePage::new(self.ctx.clone()).mount();
                self.follow(nav, &SlotArgs::default()).await
            }
            Commands::Login { email, password } => self.login(email, password).await,
            Commands::Register {
                name,
                email,
                password,
                provider,
            } => self.register(name, email, password, provider).await,
            Commands::Logout => {
                let mut navbar = Navbar::mount(self.ctx.session.clone());
                let nav = navbar.logout();
                print!("{}", views::navbar(&navbar));
                if navbar.error.is_some() {
                    return Outcome::Rejected;
                }
                self.follow(nav, &SlotArgs::default()).await
            }
            Commands::Whoami => {
                let navbar = Navbar::mount(self.ctx.session.clone());
                print!("{}", views::navbar(&navbar));
                Outcome::Done
            }
            Commands::Dashboard(selection) => self.open(Route::Dashboard, &selection).await,
            Commands::Book {
                provider,
                slot,
                selection,
            } => self.book(provider, &slot, &selection).await,
            Commands::Provider(command) => self.provider(command).await,
            Commands::Open { path, selection } => match path.parse::<Route>() {
                Ok(route) => self.open(route, &selection).await,
                Err(err) => {
                    eprintln!("{}", err);
                    Outcome::Rejected
                }
            },
        }
    }

    /// Prints the header, then the page behind `route`, following redirects.
    pub async fn open(&self, route: Route, selection: &SlotArgs) -> Outcome {
        let mut route = route;
        for _ in 0..MAX_REDIRECTS {
            info!(route = %route, "Opening page");
            print!("{}", views::navbar(&Navbar::mount(self.ctx.session.clone())));
            match self.render_page(&route, selection).await {
                Navigation::Stay => return Outcome::Done,
                Navigation::Redirect(next) => {
                    println!("{}", render::redirect_line(&next));
                    route = next;
                }
            }
        }
        Outcome::Rejected
    }

    async fn follow(&self, navigation: Navigation, selection: &SlotArgs) -> Outcome {
        match navigation {
            Navigation::Stay => Outcome::Done,
            Navigation::Redirect(route) => {
                println!("{}", render::redirect_line(&route));
                self.open(route, selection).await
            }
        }
    }

    async fn render_page(&self, route: &Route, selection: &SlotArgs) -> Navigation {
        let ctx = self.ctx.clone();
        match route {
            Route::Home => HomePage::new(ctx).mount(),
            Route::Login => {
                print!("{}", views::login(&LoginPage::new(ctx)));
                Navigation::Stay
            }
            Route::Register => {
                print!("{}", views::register(&RegisterPage::new(ctx)));
                Navigation::Stay
            }
            Route::Dashboard => {
                let mut page = DashboardPage::new(ctx);
                let nav = page.mount().await;
                if nav != Navigation::Stay {
                    return nav;
                }
                if let Some(flow) = page.booking.as_mut() {
                    apply_selection(&mut flow.picker, selection);
                }
                if selection.slots {
                    page.load_slots().await;
                }
                print!("{}", views::dashboard(&page, self.zone));
                Navigation::Stay
            }
            Route::Book(provider_id) => {
                let mut page = BookPage::new(ctx, provider_id.clone());
                let nav = page.mount().await;
                if nav != Navigation::Stay {
                    return nav;
                }
                if let Some(flow) = page.flow.as_mut() {
                    apply_selection(&mut flow.picker, selection);
                }
                if selection.slots {
                    page.load_slots().await;
                }
                print!("{}", views::book(&page, self.zone));
                Navigation::Stay
            }
            Route::ProviderDashboard => {
                let mut page = ProviderDashboardPage::new(ctx);
                let nav = page.mount().await;
                if nav == Navigation::Stay {
                    print!("{}", views::provider_dashboard(&page, self.zone));
                }
                nav
            }
            Route::ProviderSettings => {
                let mut page = ProviderSettingsPage::new(ctx);
                let nav = page.mount().await;
                if nav == Navigation::Stay {
                    apply_selection(&mut page.preview, selection);
                    if selection.slots {
                        page.load_preview().await;
                    }
                    print!("{}", views::provider_settings(&page, self.zone));
                }
                nav
            }
        }
    }

    async fn login(&self, email: String, password: String) -> Outcome {
        let mut page = LoginPage::new(self.ctx.clone());
        page.email = email;
        page.password = password;
        let nav = page.submit().await;
        print!("{}", views::login(&page));
        if page.error.is_some() {
            return Outcome::Rejected;
        }
        self.follow(nav, &SlotArgs::default()).await
    }

    async fn register(&self, name: String, email: String, password: String, provider: bool) -> Outcome {
        let mut page = RegisterPage::new(self.ctx.clone());
        page.name = name;
        page.email = email;
        page.password = password;
        page.is_provider = provider;
        let nav = page.submit().await;
        print!("{}", views::register(&page));
        if page.error.is_some() {
            return Outcome::Rejected;
        }
        self.follow(nav, &SlotArgs::default()).await
    }

    async fn book(&self, provider: Option<String>, slot: &str, selection: &SlotArgs) -> Outcome {
        match provider {
            Some(provider_id) => {
                let mut page = BookPage::new(self.ctx.clone(), provider_id);
                let nav = page.mount().await;
                if nav != Navigation::Stay {
                    return self.follow(nav, selection).await;
                }
                if let Some(flow) = page.flow.as_mut() {
                    apply_selection(&mut flow.picker, selection);
                }
                page.book(slot).await;
                print!("{}", views::book(&page, self.zone));
                Outcome::from_feedback(page.flow.as_ref().and_then(|f| f.booking.as_ref()))
            }
            None => {
                let mut page = DashboardPage::new(self.ctx.clone());
                let nav = page.mount().await;
                if nav != Navigation::Stay {
                    return self.follow(nav, selection).await;
                }
                if let Some(flow) = page.booking.as_mut() {
                    apply_selection(&mut flow.picker, selection);
                }
                page.book(slot).await;
                print!("{}", views::dashboard(&page, self.zone));
                Outcome::from_feedback(page.booking.as_ref().and_then(|f| f.booking.as_ref()))
            }
        }
    }

    async fn provider_dashboard(&self) -> Result<ProviderDashboardPage, Navigation> {
        let mut page = ProviderDashboardPage::new(self.ctx.clone());
        let nav = page.mount().await;
        match nav {
            Navigation::Stay => Ok(page),
            nav => Err(nav),
        }
    }

    async fn provider_settings(&self) -> Result<ProviderSettingsPage, Navigation> {
        let mut page = ProviderSettingsPage::new(self.ctx.clone());
        let nav = page.mount().await;
        match nav {
            Navigation::Stay => Ok(page),
            nav => Err(nav),
        }
    }

    async fn provider(&self, command: ProviderCommands) -> Outcome {
        match command {
            ProviderCommands::Dashboard { date } => {
                let mut page = match self.provider_dashboard().await {
                    Ok(page) => page,
                    Err(nav) => return self.follow(nav, &SlotArgs::default()).await,
                };
                if let Some(date) = date {
                    page.set_date(date).await;
                }
                print!("{}", views::provider_dashboard(&page, self.zone));
                Outcome::Done
            }
            ProviderCommands::Availability(command) => {
                let mut page = match self.provider_dashboard().await {
                    Ok(page) => page,
                    Err(nav) => return self.follow(nav, &SlotArgs::default()).await,
                };
                match command {
                    AvailabilityCommands::Add {
                        weekday,
                        start,
                        end,
                    } => {
                        page.availability_form.weekday = weekday;
                        page.availability_form.start_time = start;
                        page.availability_form.end_time = end;
                        page.create_availability().await;
                    }
                    AvailabilityCommands::Rm { id } => page.delete_availability(&id).await,
                }
                print!("{}", views::provider_dashboard(&page, self.zone));
                Outcome::from_feedback(page.availability_feedback.as_ref())
            }
            ProviderCommands::Block(BlockCommands::Add { start, end, reason }) => {
                let mut page = match self.provider_dashboard().await {
                    Ok(page) => page,
                    Err(nav) => return self.follow(nav, &SlotArgs::default()).await,
                };
                page.block_form = BlockForm {
                    start_at: start,
                    end_at: end,
                    reason,
                };
                page.create_block().await;
                print!("{}", views::provider_dashboard(&page, self.zone));
                Outcome::from_feedback(page.block_feedback.as_ref())
            }
            ProviderCommands::Service(command) => {
                let mut page = match self.provider_settings().await {
                    Ok(page) => page,
                    Err(nav) => return self.follow(nav, &SlotArgs::default()).await,
                };
                match command {
                    ServiceCommands::Add {
                        name,
                        duration,
                        price,
                    } => {
                        page.service_form.name = name;
                        page.service_form.duration = duration;
                        page.service_form.price = price;
                        page.create_service().await;
                    }
                    ServiceCommands::Rm { id } => page.delete_service(&id).await,
                }
                print!("{}", views::provider_settings(&page, self.zone));
                Outcome::from_feedback(page.services_feedback.as_ref())
            }
            ProviderCommands::Settings => {
                self.open(Route::ProviderSettings, &SlotArgs::default()).await
            }
            ProviderCommands::Config(ConfigCommands::Set {
                max_booking_days,
                cancel_booking_hours,
            }) => {
                let mut page = match self.provider_settings().await {
                    Ok(page) => page,
                    Err(nav) => return self.follow(nav, &SlotArgs::default()).await,
                };
                if let Some(days) = max_booking_days {
                    page.config_form.max_booking_days = days;
                }
                if let Some(hours) = cancel_booking_hours {
                    page.config_form.cancel_booking_hours = hours;
                }
                page.save_config().await;
                print!("{}", views::provider_settings(&page, self.zone));
                Outcome::from_feedback(page.config_feedback.as_ref())
            }
            ProviderCommands::Slots(selection) => {
                let mut page = match self.provider_settings().await {
                    Ok(page) => page,
                    Err(nav) => return self.follow(nav, &selection).await,
                };
                apply_selection(&mut page.preview, &selection);
                page.load_preview().await;
                print!("{}", views::provider_settings(&page, self.zone));
                match page.preview.slots.error() {
                    Some(_) => Outcome::Rejected,
                    None => Outcome::Done,
                }
            }
        }
    }
}
