//! DOM layer: builds both layouts once and repaints them from a [`Frame`].

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlImageElement,
    HtmlSelectElement,
};

use crate::game::Frame;
use crate::logos::Difficulty;

pub(crate) const ROOT_ID: &str = "logo-game";

/// A registered DOM listener; unregisters itself on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

pub(crate) struct View {
    root: HtmlElement,
    playing: HtmlElement,
    game_over: HtmlElement,
    score: Element,
    time_left: Element,
    attempts: Element,
    select: HtmlSelectElement,
    logo: HtmlImageElement,
    final_score: Element,
    high_score: Element,
    guess_buttons: Vec<(&'static str, HtmlButtonElement)>,
    restart_button: HtmlButtonElement,
    listeners: Vec<Listener>,
}

fn create<T: JsCast>(doc: &Document, tag: &str, class: &str) -> Result<T, JsValue> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el.dyn_into::<T>()?)
}

impl View {
    pub(crate) fn build(doc: &Document, choices: &[&'static str]) -> Result<Self, JsValue> {
        let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let root: HtmlElement = create(doc, "div", "logo-guessing-game")?;
        root.set_id(ROOT_ID);
        root.set_attribute("style", "max-width:640px; margin:32px auto; padding:16px 20px; font-family:'Fira Code', monospace; color:#eee; background:#181818; border:2px solid #222; border-radius:18px; box-shadow:0 0 32px 0 rgba(0,0,0,0.18); text-align:center;").ok();

        // --- Playing layout ---
        let playing: HtmlElement = create(doc, "div", "game-screen")?;

        let header: Element = create(doc, "div", "game-header")?;
        let stats: Element = create(doc, "div", "game-stats")?;
        stats.set_attribute("style", "display:flex; justify-content:space-around; color:#ffd166; margin-bottom:8px;").ok();
        let score: Element = create(doc, "span", "")?;
        let time_left: Element = create(doc, "span", "")?;
        let attempts: Element = create(doc, "span", "")?;
        stats.append_child(&score)?;
        stats.append_child(&time_left)?;
        stats.append_child(&attempts)?;
        header.append_child(&stats)?;

        let selector: Element = create(doc, "div", "difficulty-selector")?;
        let label: Element = create(doc, "label", "")?;
        label.set_text_content(Some("Difficulty: "));
        let select: HtmlSelectElement = create(doc, "select", "")?;
        for d in Difficulty::ALL {
            let opt = doc.create_element("option")?;
            opt.set_attribute("value", d.as_str())?;
            opt.set_text_content(Some(d.label()));
            select.append_child(&opt)?;
        }
        label.append_child(&select)?;
        selector.append_child(&label)?;
        header.append_child(&selector)?;
        playing.append_child(&header)?;

        let logo_box: Element = create(doc, "div", "logo-container")?;
        logo_box.set_attribute("style", "display:flex; justify-content:center; align-items:center; height:200px; margin:16px 0; background:#fff; border-radius:12px;").ok();
        let logo: HtmlImageElement = create(doc, "img", "current-logo")?;
        logo.set_alt("Logo to guess");
        logo.set_attribute("style", "max-width:180px; max-height:180px;").ok();
        logo_box.append_child(&logo)?;
        playing.append_child(&logo_box)?;

        let buttons_box: Element = create(doc, "div", "guess-buttons")?;
        buttons_box.set_attribute("style", "display:grid; grid-template-columns:repeat(4, 1fr); gap:8px;").ok();
        let mut guess_buttons = Vec::with_capacity(choices.len());
        for &name in choices {
            let button: HtmlButtonElement = create(doc, "button", "")?;
            button.set_type("button");
            button.set_text_content(Some(name));
            buttons_box.append_child(&button)?;
            guess_buttons.push((name, button));
        }
        playing.append_child(&buttons_box)?;
        root.append_child(&playing)?;

        // --- Game over layout ---
        let game_over: HtmlElement = create(doc, "div", "game-over-container")?;
        let heading: Element = create(doc, "h2", "")?;
        heading.set_text_content(Some("Game Over!"));
        let final_score: Element = create(doc, "p", "")?;
        let high_score: Element = create(doc, "p", "")?;
        let restart_button: HtmlButtonElement = create(doc, "button", "")?;
        restart_button.set_type("button");
        restart_button.set_text_content(Some("Play Again"));
        game_over.append_child(&heading)?;
        game_over.append_child(&final_score)?;
        game_over.append_child(&high_score)?;
        game_over.append_child(&restart_button)?;
        game_over.set_hidden(true);
        root.append_child(&game_over)?;

        body.append_child(&root)?;

        Ok(Self {
            root,
            playing,
            game_over,
            score,
            time_left,
            attempts,
            select,
            logo,
            final_score,
            high_score,
            guess_buttons,
            restart_button,
            listeners: Vec::new(),
        })
    }

    fn listen(
        &mut self,
        target: EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener { target, kind, callback });
        Ok(())
    }

    pub(crate) fn on_guess(
        &mut self,
        handler: impl Fn(&'static str) + Clone + 'static,
    ) -> Result<(), JsValue> {
        let targets: Vec<(&'static str, EventTarget)> = self
            .guess_buttons
            .iter()
            .map(|(name, button)| (*name, button.clone().into()))
            .collect();
        for (name, target) in targets {
            let handler = handler.clone();
            self.listen(target, "click", move |_| handler(name))?;
        }
        Ok(())
    }

    pub(crate) fn on_restart(&mut self, handler: impl Fn() + 'static) -> Result<(), JsValue> {
        let target: EventTarget = self.restart_button.clone().into();
        self.listen(target, "click", move |_| handler())
    }

    pub(crate) fn on_difficulty(
        &mut self,
        handler: impl Fn(Difficulty) + 'static,
    ) -> Result<(), JsValue> {
        let select = self.select.clone();
        let target: EventTarget = self.select.clone().into();
        self.listen(target, "change", move |_| match select.value().parse() {
            Ok(d) => handler(d),
            Err(e) => log::warn!("ignoring selector value: {}", e),
        })
    }

    pub(crate) fn apply(&self, frame: &Frame) {
        match frame {
            Frame::Playing {
                score,
                time_left,
                attempts,
                difficulty,
                logo,
                ..
            } => {
                self.game_over.set_hidden(true);
                self.playing.set_hidden(false);
                self.score.set_text_content(Some(&format!("Score: {}", score)));
                self.time_left
                    .set_text_content(Some(&format!("Time Left: {}s", time_left)));
                self.attempts
                    .set_text_content(Some(&format!("Attempts: {}", attempts)));
                if self.select.value() != difficulty.as_str() {
                    self.select.set_value(difficulty.as_str());
                }
                self.select.set_disabled(false);
                if self.logo.src() != logo.image_url {
                    self.logo.set_src(logo.image_url);
                }
                for (_, button) in &self.guess_buttons {
                    button.set_disabled(false);
                }
            }
            Frame::GameOver { score, high_score } => {
                self.playing.set_hidden(true);
                self.game_over.set_hidden(false);
                self.final_score
                    .set_text_content(Some(&format!("Your Score: {}", score)));
                self.high_score
                    .set_text_content(Some(&format!("High Score: {}", high_score)));
                self.select.set_disabled(true);
                for (_, button) in &self.guess_buttons {
                    button.set_disabled(true);
                }
            }
        }
    }
}

impl Drop for View {
    fn drop(&mut self) {
        self.listeners.clear();
        self.root.remove();
    }
}
