//! ClickFix.cloud entry point
//!
//! All DOM wiring lives here: theme toggle, mobile menu, smooth scrolling,
//! scroll progress, testimonial slider, the Konami easter egg, the bug-squash
//! overlay and the contact form. The game core in `clickfix_site::game` stays
//! DOM-free; this file is the rendering/input adapter around it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window,
    };

    use clickfix_site::audio::AudioManager;
    use clickfix_site::consts::*;
    use clickfix_site::contact::{self, ContactMessage};
    use clickfix_site::game::{tick, GameSession, MatchResult, PlayArea, SequenceMatcher};
    use clickfix_site::ui::{scroll_progress, Carousel};
    use clickfix_site::Settings;

    /// Page-wide state behind the event handlers
    struct App {
        session: GameSession,
        matcher: SequenceMatcher,
        carousel: Carousel,
        audio: AudioManager,
        settings: Settings,
        /// Rendered node per live bug id
        bug_nodes: HashMap<u32, Element>,
    }

    impl App {
        fn new(seed: u64, slide_count: usize) -> Self {
            Self {
                session: GameSession::new(seed, PlayArea::new(1.0, 1.0)),
                matcher: SequenceMatcher::konami(),
                carousel: Carousel::new(slide_count),
                audio: AudioManager::new(),
                settings: Settings::load(),
                bug_nodes: HashMap::new(),
            }
        }
    }

    fn window() -> Window {
        web_sys::window().expect("no window")
    }

    fn document() -> Document {
        window().document().expect("no document")
    }

    /// Fire-and-forget one-shot timer
    fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
        let closure = Closure::once(f);
        let _ = window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            );
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("ClickFix.cloud front-end starting...");

        let document = document();
        let slide_count = document
            .query_selector_all(".testimonial-slide")
            .map(|l| l.length() as usize)
            .unwrap_or(0);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed, slide_count)));

        init_theme(&app);
        setup_theme_toggle(app.clone());
        setup_mobile_menu(app.clone());
        setup_logo_and_anchors(app.clone());
        setup_scroll_progress();
        setup_slider(app.clone());
        setup_konami(app.clone());
        setup_exit_button(app.clone());
        setup_contact_form(app.clone());
        setup_card_reveal();
        setup_hover_effects(app.clone());

        // One loop drives every live bug; it idles while the session is off
        request_animation_frame(app);

        log::info!("ClickFix.cloud front-end running");
    }

    /// Apply the persisted theme to the page on load
    fn init_theme(app: &Rc<RefCell<App>>) {
        let a = app.borrow();
        let document = document();
        if let Some(body) = document.body() {
            let _ = body
                .class_list()
                .toggle_with_force("dark-mode", a.settings.dark_mode);
        }
        if let Some(toggle) = document.get_element_by_id("themeToggle") {
            toggle.set_text_content(Some(a.settings.theme_label()));
        }
    }

    fn setup_theme_toggle(app: Rc<RefCell<App>>) {
        let Some(toggle) = document().get_element_by_id("themeToggle") else {
            return;
        };
        let toggle_el = toggle.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut a = app.borrow_mut();
            a.settings.dark_mode = !a.settings.dark_mode;
            a.settings.save();

            if let Some(body) = document().body() {
                let _ = body
                    .class_list()
                    .toggle_with_force("dark-mode", a.settings.dark_mode);
            }
            toggle_el.set_text_content(Some(a.settings.theme_label()));
            a.audio.play_click();
        });
        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_mobile_menu(app: Rc<RefCell<App>>) {
        let document = document();
        let (Some(btn), Some(nav)) = (
            document.get_element_by_id("mobileMenuBtn"),
            document.get_element_by_id("navLinks"),
        ) else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let _ = nav.class_list().toggle("active");
            app.borrow().audio.play_click();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn smooth_scroll_to(top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }

    fn setup_logo_and_anchors(app: Rc<RefCell<App>>) {
        let document = document();

        // Logo scrolls back to the top
        if let Some(logo) = document.get_element_by_id("companyLogo") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                event.prevent_default();
                app.borrow().audio.play_click();
                smooth_scroll_to(0.0);
            });
            let _ =
                logo.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // In-page anchors scroll to their target, compensating the fixed header
        let Ok(anchors) = document.query_selector_all("a[href^='#']") else {
            return;
        };
        for i in 0..anchors.length() {
            let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if anchor.id() == "companyLogo" {
                continue;
            }
            let href = anchor.get_attribute("href").unwrap_or_default();
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                event.prevent_default();
                let document = web_sys::window().unwrap().document().unwrap();

                // Close the mobile menu if it is open
                if let Some(nav) = document.get_element_by_id("navLinks") {
                    let _ = nav.class_list().remove_1("active");
                }

                if let Some(target) = document
                    .query_selector(&href)
                    .ok()
                    .flatten()
                    .and_then(|e| e.dyn_into::<HtmlElement>().ok())
                {
                    app.borrow().audio.play_click();
                    smooth_scroll_to(target.offset_top() as f64 - ANCHOR_SCROLL_OFFSET);
                }
            });
            let _ =
                anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn update_scroll_progress() {
        let document = document();
        let (Some(root), Some(bar)) = (
            document.document_element(),
            document.get_element_by_id("scrollProgressBar"),
        ) else {
            return;
        };
        let pct = scroll_progress(
            root.scroll_top() as f64,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        if let Ok(bar) = bar.dyn_into::<HtmlElement>() {
            let _ = bar.style().set_property("width", &format!("{}%", pct));
        }
    }

    fn setup_scroll_progress() {
        update_scroll_progress();
        for event in ["scroll", "resize"] {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                update_scroll_progress();
            });
            let _ =
                window().add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Re-class the slides so only the carousel's current one shows
    fn show_slide(index: usize) {
        let Ok(slides) = document().query_selector_all(".testimonial-slide") else {
            return;
        };
        for i in 0..slides.length() {
            if let Some(slide) = slides.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                let _ = slide
                    .class_list()
                    .toggle_with_force("active", i as usize == index);
            }
        }
    }

    fn setup_slider(app: Rc<RefCell<App>>) {
        let document = document();
        for (selector, forward) in [(".prev-btn", false), (".next-btn", true)] {
            let Some(btn) = document.query_selector(selector).ok().flatten() else {
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                let index = if forward {
                    a.carousel.next()
                } else {
                    a.carousel.prev()
                };
                show_slide(index);
                a.audio.play_click();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Konami keydown feed; a full match shows the banner and schedules the
    /// game start and the banner auto-hide as one-shot timers.
    fn setup_konami(app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let result = app.borrow_mut().matcher.feed(&event.key());
            if result != MatchResult::Matched {
                return;
            }
            log::info!("Konami code matched");

            let document = document();
            if let Some(banner) = document.get_element_by_id("konamiBanner") {
                let _ = banner.class_list().add_1("show");
            }

            {
                let app = app.clone();
                set_timeout(GAME_START_DELAY_MS, move || start_bug_game(&app));
            }
            set_timeout(BANNER_HIDE_MS, || {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(banner) = document.get_element_by_id("konamiBanner") {
                    let _ = banner.class_list().remove_1("show");
                }
            });
        });
        let _ = document()
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_bug_game(app: &Rc<RefCell<App>>) {
        let document = document();
        let Some(area) = document.get_element_by_id("gameArea") else {
            return;
        };
        if let Some(overlay) = document.get_element_by_id("gameOverlay") {
            let _ = overlay.class_list().add_1("active");
        }

        let mut a = app.borrow_mut();

        // Drop any leftover nodes from a previous run
        area.set_inner_html("");
        a.bug_nodes.clear();

        a.session.set_area(PlayArea::new(
            area.client_width() as f32,
            area.client_height() as f32,
        ));
        a.session.start();
        drop(a);

        update_score_display(app);
    }

    fn update_score_display(app: &Rc<RefCell<App>>) {
        if let Some(el) = document().get_element_by_id("score") {
            el.set_text_content(Some(&app.borrow().session.score.to_string()));
        }
    }

    fn setup_exit_button(app: Rc<RefCell<App>>) {
        let Some(btn) = document().get_element_by_id("exitGame") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let document = document();
            if let Some(overlay) = document.get_element_by_id("gameOverlay") {
                let _ = overlay.class_list().remove_1("active");
            }
            if let Some(area) = document.get_element_by_id("gameArea") {
                area.set_inner_html("");
            }
            let mut a = app.borrow_mut();
            a.session.stop();
            a.bug_nodes.clear();
            a.audio.play_click();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Create the DOM node for one bug. The click handler carries the entity
    /// id explicitly; a second click on an already-squashed bug is a no-op in
    /// the session.
    fn spawn_bug_node(app: &Rc<RefCell<App>>, area: &Element, id: u32) -> Option<Element> {
        let document = document();
        let node = document.create_element("div").ok()?;
        let _ = node.class_list().add_1("bug");
        node.set_inner_html("\u{1f41b}");

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let squashed = app.borrow_mut().session.squash(id);
                if squashed {
                    app.borrow().audio.play_click();
                    update_score_display(&app);
                }
            });
            let _ = node.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        area.append_child(&node).ok()?;
        Some(node)
    }

    /// Rendering adapter: reconcile DOM nodes with the session's bugs and
    /// copy their numeric positions into CSS.
    fn sync_bug_nodes(app: &Rc<RefCell<App>>) {
        let Some(area) = document().get_element_by_id("gameArea") else {
            return;
        };

        // Spawn nodes for new bugs without holding the borrow across creation
        let missing: Vec<u32> = {
            let a = app.borrow();
            a.session
                .bugs
                .iter()
                .map(|b| b.id)
                .filter(|id| !a.bug_nodes.contains_key(id))
                .collect()
        };
        for id in missing {
            if let Some(node) = spawn_bug_node(app, &area, id) {
                app.borrow_mut().bug_nodes.insert(id, node);
            }
        }

        let mut a = app.borrow_mut();
        let App {
            ref session,
            ref mut bug_nodes,
            ..
        } = *a;

        // Drop nodes whose bug was squashed
        bug_nodes.retain(|id, node| {
            let alive = session.bugs.iter().any(|b| b.id == *id);
            if !alive {
                node.remove();
            }
            alive
        });

        for bug in &session.bugs {
            if let Some(node) = bug_nodes.get(&bug.id) {
                if let Some(el) = node.dyn_ref::<HtmlElement>() {
                    let style = el.style();
                    let _ = style.set_property("left", &format!("{}px", bug.pos.x));
                    let _ = style.set_property("top", &format!("{}px", bug.pos.y));
                }
            }
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window().request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            tick(&mut a.session);
        }
        if app.borrow().session.active {
            sync_bug_nodes(&app);
        }
        request_animation_frame(app);
    }

    fn setup_contact_form(app: Rc<RefCell<App>>) {
        let Some(form) = document()
            .get_element_by_id("contactForm")
            .and_then(|e| e.dyn_into::<web_sys::HtmlFormElement>().ok())
        else {
            return;
        };

        let form_el = form.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            app.borrow().audio.play_click();

            let Ok(data) = web_sys::FormData::new_with_form(&form_el) else {
                return;
            };
            let field = |name: &str| data.get(name).as_string().unwrap_or_default();
            let msg = ContactMessage {
                name: field("name"),
                email: field("email"),
                message: field("issue"),
            };

            let submit_btn = form_el
                .query_selector(".submit-btn")
                .ok()
                .flatten()
                .and_then(|e| e.dyn_into::<web_sys::HtmlButtonElement>().ok());
            let original_label = submit_btn
                .as_ref()
                .and_then(|b| b.text_content())
                .unwrap_or_else(|| "Send".to_string());
            if let Some(btn) = &submit_btn {
                btn.set_text_content(Some("Sending..."));
                btn.set_disabled(true);
            }

            let form_reset = form_el.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let document = document();
                let message_el = document.get_element_by_id("formMessage");

                match contact::send(&msg).await {
                    Ok(()) => {
                        form_reset.reset();
                        if let Some(el) = &message_el {
                            el.set_text_content(Some(
                                "Message sent successfully! We'll get back to you ASAP. \u{1f680}",
                            ));
                            let _ = el.class_list().add_1("success");
                        }
                    }
                    Err(e) => {
                        log::error!("Email sending failed: {}", e);
                        if let Some(el) = &message_el {
                            el.set_text_content(Some(
                                "Oops! Something went wrong. Please try again or contact us directly.",
                            ));
                            let _ = el.class_list().add_1("error");
                        }
                    }
                }

                if let Some(btn) = &submit_btn {
                    btn.set_text_content(Some(&original_label));
                    btn.set_disabled(false);
                }

                set_timeout(FORM_MESSAGE_HIDE_MS, || {
                    let document = web_sys::window().unwrap().document().unwrap();
                    if let Some(el) = document.get_element_by_id("formMessage") {
                        let _ = el.class_list().remove_2("success", "error");
                    }
                });
            });
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Fade the service cards in as they scroll into view, staggered
    fn setup_card_reveal() {
        let document = document();
        let Ok(cards) = document.query_selector_all(".service-card") else {
            return;
        };
        if cards.length() == 0 {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for (index, entry) in entries.iter().enumerate() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    set_timeout(150 * index as i32, move || {
                        if let Some(el) = target.dyn_ref::<HtmlElement>() {
                            let style = el.style();
                            let _ = style.set_property("opacity", "1");
                            let _ = style.set_property("transform", "translateY(0)");
                        }
                    });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        let Ok(observer) = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) else {
            return;
        };
        callback.forget();

        for i in 0..cards.length() {
            let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let style = card.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(20px)");
            let _ = style.set_property("transition", "opacity 0.5s ease, transform 0.5s ease");
            observer.observe(&card);
        }
    }

    /// Hover feedback on the IT icons: click sound plus a brief spin boost
    fn setup_hover_effects(app: Rc<RefCell<App>>) {
        let Ok(icons) = document().query_selector_all(".it-icon") else {
            return;
        };
        for i in 0..icons.length() {
            let Some(icon) = icons.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let app = app.clone();
            let icon_el = icon.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow().audio.play_click();
                let _ = icon_el.style().set_property("animation-duration", "0.5s");
                let icon_el = icon_el.clone();
                set_timeout(500, move || {
                    let _ = icon_el.style().remove_property("animation-duration");
                });
            });
            let _ = icon
                .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Contact icons grow slightly while their row is hovered
        let Ok(methods) = document().query_selector_all(".contact-method") else {
            return;
        };
        for i in 0..methods.length() {
            let Some(method) = methods.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            for (event, scale) in [("mouseenter", "scale(1.1)"), ("mouseleave", "scale(1)")] {
                let method_el = method.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    if let Some(icon) = method_el
                        .query_selector(".contact-icon")
                        .ok()
                        .flatten()
                        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
                    {
                        let _ = icon.style().set_property("transform", scale);
                    }
                });
                let _ = method
                    .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Submit button reverses its gradient while hovered
        let Some(btn) = document()
            .query_selector(".btn")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        for (event, gradient) in [
            ("mouseenter", "linear-gradient(to right, #4f46e5, #2563eb)"),
            ("mouseleave", "linear-gradient(to right, #2563eb, #4f46e5)"),
        ] {
            let btn_el = btn.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let _ = btn_el.style().set_property("background", gradient);
            });
            let _ = btn.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_site::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("ClickFix.cloud front-end (native) starting...");
    log::info!("The site is browser-only - build with `trunk serve` for the web version");

    println!("\nRunning matcher smoke test...");
    smoke_test_konami();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_konami() {
    use clickfix_site::game::{KONAMI_SEQUENCE, MatchResult, SequenceMatcher};

    let mut matcher = SequenceMatcher::konami();
    let mut last = MatchResult::Reset;
    for key in &KONAMI_SEQUENCE {
        last = matcher.feed(key);
    }
    assert_eq!(last, MatchResult::Matched, "full sequence should match");
    println!("✓ Konami matcher smoke test passed!");
}
