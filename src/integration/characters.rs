use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::{
    core::{state::list::Notice, view_state::ViewState},
    domain::{
        catalog::{fetch_handler, FetchHandler, PageRequest},
        error::FetchError,
        potter::{Character, LetterGroup, SortOrder},
    },
    integration::controller::{PagedList, PaginatedFetchController},
};

/// Builds the server-side fetch strategy for a sort order
pub type CharacterHandlerFactory =
    Arc<dyn Fn(SortOrder) -> FetchHandler<PageRequest, Character> + Send + Sync>;

/// Character list with a server-side sort order and a client-side letter filter
///
/// Changing the sort order swaps the fetch handler and reloads from page 1.
/// Letter groups only filter what is already loaded.
pub struct CharacterListController {
    list: PaginatedFetchController<Character>,
    factory: CharacterHandlerFactory,
    sort_order: SortOrder,
    letter_group: LetterGroup,
}

impl CharacterListController {
    pub fn new<F>(page_size: u32, factory: F) -> Result<Self>
    where
        F: Fn(SortOrder) -> FetchHandler<PageRequest, Character> + Send + Sync + 'static,
    {
        let factory: CharacterHandlerFactory = Arc::new(factory);
        let sort_order = SortOrder::default();
        let list = PaginatedFetchController::new(
            page_size,
            sorted_handler(&factory, sort_order),
        )?;
        Ok(Self {
            list,
            factory,
            sort_order,
            letter_group: LetterGroup::default(),
        })
    }

    /// Switch the server-side order and reload from page 1
    pub fn set_sort_order(&mut self, order: SortOrder) {
        if order == self.sort_order {
            return;
        }
        tracing::info!(%order, "Changing character sort order");
        self.sort_order = order;
        self.list
            .replace_fetch_handler(sorted_handler(&self.factory, order));
    }

    pub fn set_letter_group(&mut self, group: LetterGroup) {
        self.letter_group = group;
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn letter_group(&self) -> LetterGroup {
        self.letter_group
    }

    /// Loaded characters in the selected letter group
    pub fn filtered_items(&self) -> Vec<&Character> {
        self.list
            .items()
            .iter()
            .filter(|character| self.is_visible(character))
            .collect()
    }

    pub fn list(&self) -> &PaginatedFetchController<Character> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut PaginatedFetchController<Character> {
        &mut self.list
    }
}

/// Wrap the factory's handler so each page arrives sorted by name
fn sorted_handler(
    factory: &CharacterHandlerFactory,
    order: SortOrder,
) -> FetchHandler<PageRequest, Character> {
    let inner = factory(order);
    fetch_handler(move |request: PageRequest| {
        let fetch = inner.fetch(request);
        async move {
            let mut page = fetch.await?;
            order.sort_characters(&mut page.items);
            Ok::<_, FetchError>(page)
        }
    })
}

impl PagedList for CharacterListController {
    type Item = Character;

    fn items(&self) -> &[Character] {
        self.list.items()
    }

    fn view_state(&self) -> &ViewState {
        self.list.view_state()
    }

    fn can_load_more(&self) -> bool {
        self.list.can_load_more()
    }

    fn load_initial(&mut self) {
        self.list.load_initial();
    }

    fn load_more_after(&mut self, id: String) {
        self.list.load_more_after(id);
    }

    fn retry_load_more(&mut self) {
        self.list.retry_load_more();
    }

    fn take_notice(&mut self) -> Option<Notice> {
        self.list.take_notice()
    }

    fn is_visible(&self, character: &Character) -> bool {
        self.letter_group.contains(&character.attributes.name)
    }

    async fn settle(&mut self) {
        self.list.settle().await;
    }
}
