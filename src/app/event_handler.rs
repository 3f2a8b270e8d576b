// src/app/event_handler.rs
//! ボタンとカードのクリックを `InputEvent` に変換してコントローラーに渡すよ。

use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::app::context::AppContext;
use crate::app::renderer::image_failure_message;
use crate::config::layout::*;
use crate::protocol::InputEvent;

/// `data-index` 属性の値をカード番号にする。
pub(crate) fn parse_card_index(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
}

/// ボタン ID とそれが送るイベントの対応表
fn button_bindings() -> [(&'static str, InputEvent); 6] {
    [
        (START_BUTTON_ID, InputEvent::Start),
        (RESTART_BUTTON_ID, InputEvent::RetrySamePositions),
        (PLAY_AGAIN_BUTTON_ID, InputEvent::RetryShuffled),
        (PAUSE_BUTTON_ID, InputEvent::Pause),
        (RESUME_BUTTON_ID, InputEvent::Resume),
        (MENU_BUTTON_ID, InputEvent::RestartToMenu),
    ]
}

/// クリックされた要素から一番近いカードを探して番号を返す
fn card_index_from_event(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let card = target.closest(CARD_SELECTOR).ok()??;
    parse_card_index(card.get_attribute(CARD_INDEX_ATTR).as_deref())
}

/// リスナーを全部つける。返した Closure は GameApp が持っておくこと！
/// (drop するとリスナーが死ぬ)
pub(crate) fn attach_listeners(ctx: &AppContext) -> Result<Vec<Closure<dyn FnMut(Event)>>, JsValue> {
    let document = ctx.view.document();
    let mut closures = Vec::new();

    for (id, input) in button_bindings() {
        let Some(button) = document.get_element_by_id(id) else {
            warn!("EventHandler: #{} not found, skipping", id);
            continue;
        };
        let button_ctx = ctx.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            button_ctx.dispatch(input);
        }) as Box<dyn FnMut(Event)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closures.push(closure);
        debug!("EventHandler: #{} -> {:?}", id, input);
    }

    // カードは作り直されるので、グリッドに 1 個だけつけて委譲する
    let grid_ctx = ctx.clone();
    let grid_closure = Closure::wrap(Box::new(move |event: Event| {
        if let Some(index) = card_index_from_event(&event) {
            grid_ctx.dispatch(InputEvent::PickCard { index });
        }
    }) as Box<dyn FnMut(Event)>);
    ctx.view
        .grid()
        .add_event_listener_with_callback("click", grid_closure.as_ref().unchecked_ref())?;
    closures.push(grid_closure);

    // img の error はバブルしないのでキャプチャで拾う
    let image_error_closure = Closure::wrap(Box::new(move |event: Event| {
        let src = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.get_attribute("src"));
        error!("{}", image_failure_message(src.as_deref()));
    }) as Box<dyn FnMut(Event)>);
    ctx.view.grid().add_event_listener_with_callback_and_bool(
        "error",
        image_error_closure.as_ref().unchecked_ref(),
        true,
    )?;
    closures.push(image_error_closure);

    Ok(closures)
}
