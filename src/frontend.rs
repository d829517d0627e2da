use crate::config::PageConfig;
use crate::content::{
    project_cards, skill_rows, ProjectCard, SkillRow, PROFESSIONS, PROJECTS, SKILLS,
};
use crate::logging::Logger;
use crate::reveal::{refill_progress_bars, RevealTracker, REVEALED_CLASS, SECTION_SELECTOR};
use crate::schedule::Scheduler;
use crate::scroll::{
    anchor_scroll_top, back_to_top_active, fragment_id, ACTIVE_CLASS, BACK_TO_TOP_SELECTOR,
    HEADER_SELECTOR, IN_PAGE_LINK_SELECTOR,
};
use crate::theme::{PreferenceStore, Theme, ThemePreference, DARK_MODE_CLASS};
use crate::typing::{schedule_typing, TypingAnimator};
use js_sys::{Array, Function, Reflect};
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollToOptions, Storage, Window,
};
use yew::prelude::*;

const THEME_TOGGLE_ID: &str = "themeToggle";
const TYPING_TEXT_SELECTOR: &str = ".typing-text";
const SKILLS_GRID_SELECTOR: &str = ".skills-grid";
const PROJECTS_GRID_SELECTOR: &str = ".projects-grid";
const PROGRESS_BAR_SELECTOR: &str = ".skill-progress";

struct WindowTimers;

impl Scheduler for WindowTimers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let Some(win) = window() else {
            return;
        };

        let callback = Closure::once_into_js(move || task());
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let _ = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout);
    }
}

struct LocalStorage(Option<Storage>);

impl LocalStorage {
    fn open() -> Self {
        Self(window().and_then(|w| w.local_storage().ok().flatten()))
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            let _ = storage.set_item(key, value);
        }
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme(document: &Document, theme: Theme) {
    if let Some(body) = document.body() {
        let _ = body
            .class_list()
            .toggle_with_force(DARK_MODE_CLASS, theme == Theme::Dark);
    }

    if let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let _ = toggle.set_attribute("aria-pressed", &theme.pressed().to_string());
        let _ = toggle.set_attribute("aria-label", &theme.toggle_label());
    }
}

fn apply_theme_with_transition(document: &Document, theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(document, theme);
        return;
    }

    let document_js: &JsValue = document.as_ref();
    let Ok(start_view_transition) =
        Reflect::get(document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(document, theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(document, theme);
        return;
    };

    let target = document.clone();
    let callback = Closure::once_into_js(move || apply_theme(&target, theme));

    if start_view_transition.call1(document_js, &callback).is_err() {
        apply_theme(document, theme);
    }
}

fn install_theme(document: &Document, logger: Logger) -> Result<(), JsValue> {
    let mut preference = ThemePreference::initialize(LocalStorage::open(), system_prefers_dark);
    apply_theme(document, preference.current());
    logger.debug("theme_applied", json!({ "theme": preference.current() }));

    let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        skipped(logger, "theme_toggle", "#themeToggle");
        return Ok(());
    };

    let target = document.clone();
    let on_toggle = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        let next = preference.toggle();
        apply_theme_with_transition(&target, next);
        logger.info("theme_toggled", json!({ "theme": next }));
    });
    toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    Ok(())
}

#[derive(Properties, PartialEq)]
struct SkillsGridProps {
    rows: Vec<SkillRow>,
}

#[function_component(SkillsGrid)]
fn skills_grid(props: &SkillsGridProps) -> Html {
    props
        .rows
        .iter()
        .map(|row| {
            html! {
                <div class="skill-item">
                    <div class="skill-header">
                        <i class={row.icon} aria-hidden="true"></i>
                        <span class="skill-name">{row.name}</span>
                    </div>
                    <div class="skill-bar">
                        <div class="skill-progress" style={row.progress_style()}></div>
                    </div>
                </div>
            }
        })
        .collect::<Html>()
}

#[derive(Properties, PartialEq)]
struct ProjectsGridProps {
    cards: Vec<ProjectCard>,
}

#[function_component(ProjectsGrid)]
fn projects_grid(props: &ProjectsGridProps) -> Html {
    props
        .cards
        .iter()
        .map(|card| {
            html! {
                <div class="project-card">
                    <div class="project-image-container">
                        <img src={card.image} alt={card.title} class="project-image" loading="lazy" />
                    </div>
                    <div class="project-content">
                        <h3 class="project-title">{card.title}</h3>
                        <p class="project-description">{card.description}</p>
                        <div class="project-tech">
                            { for card.tags.iter().map(|tag| html! { <span class="tech-tag">{*tag}</span> }) }
                        </div>
                        <div class="project-links">
                            { for card.links.iter().map(|link| html! {
                                <a
                                    href={link.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="project-link"
                                    aria-label={link.kind.label()}
                                >
                                    <i class={link.kind.icon()} aria-hidden="true"></i>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Html>()
}

fn render_content(document: &Document, logger: Logger) -> Result<(), JsValue> {
    match document.query_selector(SKILLS_GRID_SELECTOR)? {
        Some(container) => {
            let rows = skill_rows(SKILLS);
            yew::Renderer::<SkillsGrid>::with_root_and_props(container, SkillsGridProps { rows })
                .render();
        }
        None => skipped(logger, "skills_grid", SKILLS_GRID_SELECTOR),
    }

    match document.query_selector(PROJECTS_GRID_SELECTOR)? {
        Some(container) => {
            let cards = project_cards(PROJECTS);
            yew::Renderer::<ProjectsGrid>::with_root_and_props(
                container,
                ProjectsGridProps { cards },
            )
            .render();
        }
        None => skipped(logger, "projects_grid", PROJECTS_GRID_SELECTOR),
    }

    Ok(())
}

fn element_list(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn refill_skill_bars(document: &Document, levels: &[u8], scheduler: &dyn Scheduler, delay_ms: u32) {
    let Ok(bars) = element_list(document, PROGRESS_BAR_SELECTOR) else {
        return;
    };

    let bars: Vec<(HtmlElement, u8)> = bars
        .into_iter()
        .filter_map(|bar| bar.dyn_into::<HtmlElement>().ok())
        .zip(levels.iter().copied())
        .collect();

    refill_progress_bars(
        bars,
        scheduler,
        delay_ms,
        Rc::new(|bar: &HtmlElement, width: &str| {
            let _ = bar.style().set_property("width", width);
        }),
    );
}

fn install_reveal(
    document: &Document,
    config: &PageConfig,
    scheduler: Rc<dyn Scheduler>,
    logger: Logger,
) -> Result<(), JsValue> {
    let sections = element_list(document, SECTION_SELECTOR)?;
    if sections.is_empty() {
        skipped(logger, "reveal", SECTION_SELECTOR);
        return Ok(());
    }

    let mut tracker = RevealTracker::new(
        sections
            .iter()
            .map(|section| Some(section.id()).filter(|id| !id.is_empty())),
    );
    let levels: Vec<u8> = skill_rows(SKILLS).iter().map(|row| row.level).collect();
    let fill_delay_ms = config.progress_fill_delay_ms;
    let observed = sections.clone();
    let target_document = document.clone();

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = observed.iter().position(|section| *section == target) else {
                    continue;
                };
                let Some(reveal) = tracker.on_intersection(key, entry.is_intersecting()) else {
                    continue;
                };

                let _ = target.class_list().add_1(REVEALED_CLASS);
                observer.unobserve(&target);
                logger.debug(
                    "section_revealed",
                    json!({ "section": target.id(), "key": reveal.key }),
                );

                if reveal.refill_progress {
                    refill_skill_bars(&target_document, &levels, &*scheduler, fill_delay_ms);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold()));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for section in &sections {
        observer.observe(section);
    }

    Ok(())
}

fn install_typing(
    document: &Document,
    config: &PageConfig,
    scheduler: Rc<dyn Scheduler>,
    logger: Logger,
) -> Result<(), JsValue> {
    let Some(target) = document.query_selector(TYPING_TEXT_SELECTOR)? else {
        skipped(logger, "typing", TYPING_TEXT_SELECTOR);
        return Ok(());
    };

    let animator = TypingAnimator::new(PROFESSIONS.iter().copied(), config.typing);
    schedule_typing(
        animator,
        scheduler,
        Rc::new(move |text: &str| target.set_text_content(Some(text))),
        config.typing_start_delay_ms,
    );

    Ok(())
}

fn smooth_scroll_to(win: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn install_back_to_top(document: &Document, config: &PageConfig, logger: Logger) -> Result<(), JsValue> {
    let Some(win) = window() else {
        return Ok(());
    };
    let Some(control) = document.query_selector(BACK_TO_TOP_SELECTOR)? else {
        skipped(logger, "back_to_top", BACK_TO_TOP_SELECTOR);
        return Ok(());
    };

    let threshold = config.back_to_top_offset;
    let scroll_window = win.clone();
    let indicator = control.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let offset = scroll_window.scroll_y().unwrap_or(0.0);
        let _ = indicator
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, back_to_top_active(offset, threshold));
    });

    let listener_options = AddEventListenerOptions::new();
    listener_options.set_passive(true);
    win.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &listener_options,
    )?;
    on_scroll.forget();

    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        event.prevent_default();
        smooth_scroll_to(&win, 0.0);
    });
    control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

fn header_height(document: &Document) -> f64 {
    document
        .query_selector(HEADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0)
}

fn install_anchor_scrolling(
    document: &Document,
    config: &PageConfig,
    logger: Logger,
) -> Result<(), JsValue> {
    let Some(win) = window() else {
        return Ok(());
    };

    let margin = config.anchor_margin;
    let mut attached = 0_usize;

    for anchor in element_list(document, IN_PAGE_LINK_SELECTOR)? {
        // The back-to-top control scrolls to the origin on its own.
        if anchor.matches(BACK_TO_TOP_SELECTOR)? {
            continue;
        }

        let link = anchor.clone();
        let target_document = document.clone();
        let scroll_window = win.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();

            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) =
                fragment_id(&href).and_then(|id| target_document.get_element_by_id(id))
            else {
                return;
            };

            let target_top =
                target.get_bounding_client_rect().top() + scroll_window.scroll_y().unwrap_or(0.0);
            let top = anchor_scroll_top(target_top, header_height(&target_document), margin);
            smooth_scroll_to(&scroll_window, top);
        });
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        attached += 1;
    }

    logger.debug("anchors_attached", json!({ "count": attached }));
    Ok(())
}

fn skipped(logger: Logger, component: &str, missing: &str) {
    logger.debug(
        "component_skipped",
        json!({ "component": component, "missing": missing }),
    );
}

fn report(logger: Logger, component: &str, result: Result<(), JsValue>) {
    if let Err(error) = result {
        logger.warn(
            "component_failed",
            json!({ "component": component, "error": format!("{error:?}") }),
        );
    }
}

fn start(document: &Document) {
    let config = PageConfig::from_lookup(|name| {
        document
            .body()
            .and_then(|body| body.get_attribute(&format!("data-{name}")))
    });
    let logger = Logger::new(config.log_level);
    let scheduler: Rc<dyn Scheduler> = Rc::new(WindowTimers);

    report(logger, "theme", install_theme(document, logger));
    report(logger, "content", render_content(document, logger));
    report(
        logger,
        "reveal",
        install_reveal(document, &config, Rc::clone(&scheduler), logger),
    );
    report(
        logger,
        "typing",
        install_typing(document, &config, scheduler, logger),
    );
    report(logger, "back_to_top", install_back_to_top(document, &config, logger));
    report(logger, "anchors", install_anchor_scrolling(document, &config, logger));

    logger.info("page_ready", config.summary());
}

pub fn run() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        start(&document);
        return;
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || start(&target));
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
}
