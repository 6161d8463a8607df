use chrono::{DateTime, Utc};
use ratatui::{layout::Rect, style::Color, widgets::ListState, Frame};

use friendstui::logic;
use friendstui::model::{ConnectionState, Model, SelectedItem};
use friendstui::Tab;

use super::{
    cards, detail, header, layout,
    legend::{self, LegendContext},
    search,
    status_bar::{self, StatusInfo},
    tabs, toast,
};
use crate::App;

/// Row count shown on a tab, `None` while its data is not loaded
fn tab_count(model: &Model, tab: Tab) -> Option<usize> {
    match tab {
        Tab::Colleagues => model
            .friends
            .colleagues
            .as_ref()
            .map(|_| model.list_len(tab)),
        Tab::Search => model
            .friends
            .search_results
            .as_ref()
            .map(|(_, response)| response.results.len()),
        _ => model.friends.loaded.then(|| model.list_len(tab)),
    }
}

/// Unfiltered size of a tab's source list
fn source_count(model: &Model, tab: Tab) -> usize {
    match tab {
        Tab::Connections | Tab::Suggestions | Tab::Colleagues => {
            model.friends.people_for_tab(tab).len()
        }
        Tab::Requests => model.friends.data.pending_requests.len(),
        Tab::Activity | Tab::Search => model.list_len(tab),
    }
}

fn empty_message(tab: Tab, filtered: bool) -> &'static str {
    if filtered {
        return "No matches for the current filters (C to clear)";
    }
    match tab {
        Tab::Connections => "No connections yet",
        Tab::Requests => "No pending requests",
        Tab::Suggestions => "No suggestions right now",
        Tab::Colleagues => "No colleagues found",
        Tab::Activity => "No recent activity",
        Tab::Search => "No results",
    }
}

/// Card list (or placeholder) for the current tab
fn render_content(f: &mut Frame, area: Rect, model: &Model, now: DateTime<Utc>) {
    let tab = model.current_tab();
    let title = tab.title().to_string();
    let filtered = !model.ui.filters.is_empty();

    // Create temporary ListState for rendering
    let mut state = ListState::default();
    state.select(model.navigation.selected(tab));

    // Tabs with their own data source come first
    match tab {
        Tab::Colleagues if model.friends.colleagues.is_none() => {
            let message = if model.performance.loading_colleagues {
                "Loading colleagues..."
            } else {
                "Colleagues not loaded (r to retry)"
            };
            cards::render_placeholder(f, area, title, message, Color::DarkGray);
            return;
        }
        Tab::Search => {
            match &model.friends.search_results {
                None => {
                    let message = if model.performance.searching {
                        "Searching..."
                    } else {
                        "Type a query (at least 2 characters) and press Enter"
                    };
                    cards::render_placeholder(f, area, title, message, Color::DarkGray);
                }
                Some((query, response))
                    if response.results.is_empty() && response.suggestions.is_empty() =>
                {
                    cards::render_placeholder(
                        f,
                        area,
                        format!("Search: {}", query),
                        &format!("No results for \"{}\"", query),
                        Color::DarkGray,
                    );
                }
                Some((query, response)) => {
                    cards::render_search_results(
                        f,
                        area,
                        format!("Search: {}", query),
                        response,
                        &mut state,
                    );
                }
            }
            return;
        }
        _ => {}
    }

    if tab != Tab::Colleagues && !model.friends.loaded {
        match &model.friends.connection_state {
            ConnectionState::Disconnected {
                error_type,
                message,
            } => {
                let banner = format!(
                    "{}\n\nPress r to retry",
                    logic::errors::load_failure_banner(error_type, message)
                );
                cards::render_placeholder(f, area, title, &banner, Color::Red);
            }
            _ => {
                cards::render_placeholder(f, area, title, "Loading friends data...", Color::DarkGray)
            }
        }
        return;
    }

    match tab {
        Tab::Connections | Tab::Suggestions | Tab::Colleagues => {
            let people = model.visible_people(tab);
            if people.is_empty() {
                cards::render_placeholder(f, area, title, empty_message(tab, filtered), Color::DarkGray);
            } else {
                cards::render_people(
                    f,
                    area,
                    title,
                    &people,
                    &model.performance.processing,
                    &mut state,
                    now,
                );
            }
        }
        Tab::Requests => {
            let requests = model.visible_requests();
            if requests.is_empty() {
                cards::render_placeholder(f, area, title, empty_message(tab, filtered), Color::DarkGray);
            } else {
                cards::render_requests(
                    f,
                    area,
                    title,
                    &requests,
                    &model.performance.processing,
                    &mut state,
                    now,
                );
            }
        }
        Tab::Activity => {
            let items = &model.friends.data.recent_activity;
            if items.is_empty() {
                cards::render_placeholder(f, area, title, empty_message(tab, false), Color::DarkGray);
            } else {
                cards::render_activity(f, area, title, items, &mut state, now);
            }
        }
        Tab::Search => {}
    }
}

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.model;
    let tab = model.current_tab();
    let now = Utc::now();

    let search_text = if tab == Tab::Search {
        model.ui.remote_query.as_str()
    } else {
        model.ui.filters.search_term.as_str()
    };
    let filter_visible = tab.is_filterable() || tab == Tab::Search;

    let legend_ctx = LegendContext {
        vim_mode: model.ui.vim_mode,
        tab,
        search_mode: model.ui.search_mode,
        has_search_text: !search_text.is_empty(),
        popup_open: model.ui.detail_popup.is_some(),
    };

    // Calculate layout
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);
    let layout_info = layout::calculate_layout(size, legend_height, filter_visible);

    // Header: connection state, backend stats, derived summary for the tab
    let departments = model.friends.department_options(&app.config.departments);
    let has_summary = match tab {
        Tab::Activity | Tab::Search => false,
        Tab::Colleagues => model.friends.colleagues.is_some(),
        _ => model.friends.loaded,
    };
    let summary = has_summary.then(|| model.friends.summary_for_tab(tab, &departments));
    header::render_header(
        f,
        layout_info.header_area,
        &model.friends.connection_state,
        model.friends.loaded.then_some(&model.friends.data.stats),
        tab,
        summary.as_ref(),
    );

    let counts: Vec<Option<usize>> = Tab::ALL.iter().map(|t| tab_count(model, *t)).collect();
    tabs::render_tabs(f, layout_info.tabs_area, tab, &counts);

    if let Some(filter_area) = layout_info.filter_area {
        let filters = (tab != Tab::Search).then_some(&model.ui.filters);
        search::render_filter_bar(
            f,
            filter_area,
            search_text,
            model.ui.search_mode,
            tab_count(model, tab),
            filters,
            model.ui.vim_mode,
        );
    }

    render_content(f, layout_info.list_area, model, now);

    let selected = model.selected_item();

    if let Some(detail_area) = layout_info.detail_area {
        match &selected {
            Some(SelectedItem::Person(person)) => {
                detail::render_detail_pane(f, detail_area, Some(person), None, now)
            }
            Some(SelectedItem::Request(request)) => detail::render_detail_pane(
                f,
                detail_area,
                Some(&request.from),
                Some(request.message.as_str()).filter(|m| !m.is_empty()),
                now,
            ),
            None => detail::render_detail_pane(f, detail_area, None, None, now),
        }
    }

    legend::render_legend(f, layout_info.legend_area, legend_ctx);

    let selected_name = selected.as_ref().map(|item| match item {
        SelectedItem::Person(person) => person.full_name(),
        SelectedItem::Request(request) => request.from.full_name(),
    });
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &StatusInfo {
            tab,
            item_count: model.list_len(tab),
            source_count: source_count(model, tab),
            sort_mode: model.ui.sort_mode,
            sort_reverse: model.ui.sort_reverse,
            last_load_time_ms: model.performance.last_load_time_ms,
            processing: model.performance.processing.len(),
            selected_name: selected_name.as_deref(),
        },
    );

    // Render detail popup if active
    if let Some(popup) = &model.ui.detail_popup {
        let processing = model.performance.is_processing(&popup.action_id);
        detail::render_detail_popup(f, popup, processing, now);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
