use iced::{Element, Task, Theme};

mod links;
mod state;
mod ui;

use state::catalog::{self, Catalog};
use state::favorites::FavoritesLedger;
use state::filter::{FilterCriteria, FilterField, PriceRange, SortBy, StatusFilter, WeightRange};

/// Which screen is showing.
///
/// The Detail screen carries its own favorites ledger, loaded fresh when the
/// screen opens. The Gallery keeps a separate copy; the two are deliberately
/// not kept in sync while both exist, matching the original page model where
/// each page reads storage on mount.
enum Screen {
    Gallery,
    Detail {
        id: String,
        favorites: FavoritesLedger,
    },
}

/// Main application state
struct GoatGallery {
    /// The read-only catalog snapshot
    catalog: Catalog,
    /// Current search/filter/sort selection (session-only)
    criteria: FilterCriteria,
    /// Whether the filter panel is expanded
    show_filters: bool,
    /// The gallery's copy of the favorites ledger
    favorites: FavoritesLedger,
    screen: Screen,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup catalog load finished
    CatalogLoaded(Catalog),

    // Search, filter and sort selection
    SearchChanged(String),
    StatusSelected(StatusFilter),
    PriceSelected(PriceRange),
    WeightSelected(WeightRange),
    SortSelected(SortBy),
    ToggleFilterPanel,
    /// User removed one active-filter chip
    RemoveChip(FilterField),
    ClearAllFilters,

    // Navigation
    OpenGoat(String),
    BackToGallery,

    // Favorites (one message per view, each with its own ledger)
    ToggleFavorite(String),
    ToggleDetailFavorite(String),

    // Outbound actions
    ContactSeller(String),
    CallSeller,
    WatchVideo(String),
    CopyLink(String),
    ShareWhatsApp(String),
    ShareTwitter(String),
    ShareFacebook(String),
}

impl GoatGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let favorites = FavoritesLedger::load_default();
        println!("🐐 Goat Gallery starting, {} favorites on file", favorites.len());

        let app = GoatGallery {
            catalog: Catalog::embedded(),
            criteria: FilterCriteria::default(),
            show_filters: false,
            favorites,
            screen: Screen::Gallery,
            status: String::from("Loading catalog..."),
        };

        // Pick up a user-supplied catalog override without blocking the
        // first frame; the embedded snapshot shows in the meantime.
        (
            app,
            Task::perform(catalog::load_catalog(), Message::CatalogLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(catalog) => {
                self.status = format!("Ready. {} goats listed.", catalog.len());
                self.catalog = catalog;
            }

            Message::SearchChanged(term) => self.criteria.search_term = term,
            Message::StatusSelected(status) => self.criteria.status = status,
            Message::PriceSelected(price) => self.criteria.price = price,
            Message::WeightSelected(weight) => self.criteria.weight = weight,
            Message::SortSelected(sort) => self.criteria.sort = sort,
            Message::ToggleFilterPanel => self.show_filters = !self.show_filters,
            Message::RemoveChip(field) => self.criteria.reset(field),
            Message::ClearAllFilters => self.criteria.clear_all(),

            Message::OpenGoat(id) => {
                // The detail screen mounts with its own ledger copy
                self.screen = Screen::Detail {
                    id,
                    favorites: FavoritesLedger::load_default(),
                };
            }
            Message::BackToGallery => {
                // Remounting the gallery re-reads storage, picking up any
                // toggles made on the detail screen.
                self.favorites = FavoritesLedger::load_default();
                self.screen = Screen::Gallery;
            }

            Message::ToggleFavorite(id) => {
                if let Err(e) = self.favorites.toggle(&id) {
                    eprintln!("⚠️  Could not save favorites: {e}");
                }
            }
            Message::ToggleDetailFavorite(id) => {
                if let Screen::Detail { favorites, .. } = &mut self.screen {
                    if let Err(e) = favorites.toggle(&id) {
                        eprintln!("⚠️  Could not save favorites: {e}");
                    }
                }
            }

            Message::ContactSeller(id) => links::open_external(&links::contact_whatsapp_url(&id)),
            Message::CallSeller => links::open_external(&links::call_url()),
            Message::WatchVideo(url) => links::open_external(&url),
            Message::CopyLink(id) => return iced::clipboard::write(links::listing_url(&id)),
            Message::ShareWhatsApp(id) => links::open_external(&links::share_whatsapp_url(&id)),
            Message::ShareTwitter(id) => links::open_external(&links::share_twitter_url(&id)),
            Message::ShareFacebook(id) => links::open_external(&links::share_facebook_url(&id)),
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Gallery => ui::gallery::view(
                &self.catalog,
                &self.criteria,
                self.show_filters,
                &self.favorites,
                &self.status,
            ),
            Screen::Detail { id, favorites } => ui::detail::view(&self.catalog, id, favorites),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application(
        "A.B Livestocks",
        GoatGallery::update,
        GoatGallery::view,
    )
    .theme(GoatGallery::theme)
    .centered()
    .run_with(GoatGallery::new)
}
