use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::error::DomError;
use crate::viewport::watcher::{Listener, Probe, Rect, ViewportWatcher, WatchId, WatchOptions};

const VIEWPORT_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Shared handle to the page's single [`ViewportWatcher`].
#[derive(Clone, Default)]
pub struct ViewportHandle {
    watcher: Rc<RefCell<ViewportWatcher>>,
}

impl PartialEq for ViewportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.watcher, &other.watcher)
    }
}

impl ViewportHandle {
    pub fn watch(&self, options: WatchOptions, probe: Probe, listener: Listener) -> WatchId {
        let mut watcher = self.watcher.borrow_mut();
        let id = watcher.watch(options, probe, listener);
        debug!("Watching {} viewport regions", watcher.len());
        id
    }

    pub fn unwatch(&self, id: WatchId) {
        self.watcher.borrow_mut().unwatch(id);
    }

    pub fn is_in_view(&self, id: WatchId) -> bool {
        self.watcher.borrow().is_in_view(id)
    }

    /// Re-tests every region against the current window size and delivers
    /// the changes once the watcher is released.
    pub fn refresh(&self) {
        if self.watcher.borrow().is_empty() {
            return;
        }
        let Some(viewport) = window_viewport() else {
            return;
        };
        let notifications = self.watcher.borrow_mut().dispatch(viewport);
        for notification in notifications {
            notification.deliver();
        }
    }
}

fn window_viewport() -> Option<Rect> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Rect::new(0.0, 0.0, width, height))
}

fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

/// Hooks `handle.refresh` to the window's scroll and resize events and
/// returns the function that unhooks it.
fn install(handle: ViewportHandle) -> Result<Box<dyn FnOnce()>, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let callback = Closure::<dyn Fn()>::new(move || handle.refresh());

    for (registered, &event) in VIEWPORT_EVENTS.iter().enumerate() {
        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            remove_listeners(&window, &VIEWPORT_EVENTS[..registered], &callback);
            return Err(DomError::Listener {
                event,
                reason: format!("{:?}", err),
            });
        }
    }

    Ok(Box::new(move || {
        remove_listeners(&window, &VIEWPORT_EVENTS, &callback);
    }))
}

fn remove_listeners(window: &Window, events: &[&str], callback: &Closure<dyn Fn()>) {
    for event in events {
        let _ = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page-wide watcher and the one pair of window listeners feeding it.
#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let handle = (*use_state(ViewportHandle::default)).clone();

    {
        use_effect_with_deps(
            move |handle| {
                let destructor = match install(handle.clone()) {
                    Ok(destructor) => {
                        debug!("Viewport listeners installed");
                        handle.refresh();
                        destructor
                    }
                    Err(err) => {
                        warn!("Scroll reveal disabled: {}", err);
                        Box::new(|| ()) as Box<dyn FnOnce()>
                    }
                };
                move || destructor()
            },
            handle.clone(),
        );
    }

    html! {
        <ContextProvider<ViewportHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<ViewportHandle>>
    }
}

/// Whether the element behind `node` satisfies `options` right now.
///
/// Outside a [`ViewportProvider`], or while `node` is not mounted, the
/// answer is always `false`.
#[hook]
pub fn use_in_view(node: NodeRef, options: WatchOptions) -> bool {
    let in_view = use_state_eq(|| false);
    let viewport = use_context::<ViewportHandle>();

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options, viewport)| {
                let registration = match viewport {
                    Some(viewport) => {
                        let probe_node = node.clone();
                        let probe: Probe =
                            Box::new(move || probe_node.cast::<Element>().map(|el| element_rect(&el)));
                        let sink = in_view.clone();
                        let listener: Listener = Rc::new(move |visible: bool| sink.set(visible));
                        let id = viewport.watch(*options, probe, listener);
                        viewport.refresh();
                        // A fresh registration only notifies on change, so a
                        // value left over from the previous one must be replaced.
                        in_view.set(viewport.is_in_view(id));
                        Some((viewport.clone(), id))
                    }
                    None => {
                        in_view.set(false);
                        warn!("use_in_view rendered outside a ViewportProvider; region stays hidden");
                        None
                    }
                };
                move || {
                    if let Some((viewport, id)) = registration {
                        viewport.unwatch(id);
                    }
                }
            },
            (node, options, viewport),
        );
    }

    *in_view
}
