//! Drives an [`ExerciseCatalog`] on the browser event loop.
//!
//! Fetches and the debounce timer run as local tasks. Both are wrapped in abortable futures, so
//! a superseded fetch or a replaced timer is cancelled instead of completing in the background.
//! Tasks only hold weak references to the controller state and become no-ops after teardown.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use chrono::{DateTime, Utc};
use futures_util::future::{AbortHandle, Aborted, abortable};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use stort_domain::{
    CatalogView, Command, Debouncer, Event, ExerciseCatalog, ExerciseRepository, ExerciseService,
    FetchRequest, FetchResponse, Service,
};
use wasm_bindgen_futures::spawn_local;

type Listener = Box<dyn Fn(&CatalogView<'_>)>;

pub struct Controller<R> {
    inner: Rc<Inner<R>>,
}

struct Inner<R> {
    catalog: RefCell<ExerciseCatalog>,
    service: Rc<Service<R>>,
    timer: RefCell<Option<AbortHandle>>,
    in_flight: RefCell<Option<AbortHandle>>,
    listener: Listener,
}

impl<R: ExerciseRepository + 'static> Controller<R> {
    /// The listener is called with the current view after every state change. It must not
    /// dispatch events synchronously.
    pub fn new(
        repository: R,
        debouncer: Debouncer,
        listener: impl Fn(&CatalogView<'_>) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                catalog: RefCell::new(ExerciseCatalog::new(debouncer)),
                service: Rc::new(Service::new(repository)),
                timer: RefCell::new(None),
                in_flight: RefCell::new(None),
                listener: Box::new(listener),
            }),
        }
    }

    pub fn dispatch(&self, event: Event) {
        self.inner.dispatch(event);
    }

    pub fn dispose(&self) {
        self.dispatch(Event::Disposed);
    }
}

impl<R> Controller<R> {
    pub fn with_view<T>(&self, f: impl FnOnce(&CatalogView<'_>) -> T) -> T {
        f(&self.inner.catalog.borrow().view())
    }
}

impl<R> Drop for Controller<R> {
    fn drop(&mut self) {
        let mut catalog = self.inner.catalog.borrow_mut();
        if !catalog.is_disposed() {
            catalog.handle(Event::Disposed, Utc::now());
            drop(catalog);
            self.inner.release();
        }
    }
}

impl<R> Inner<R> {
    fn notify(&self) {
        let catalog = self.catalog.borrow();
        if !catalog.is_disposed() {
            (self.listener)(&catalog.view());
        }
    }

    fn cancel_timer(&self) {
        let timer = self.timer.borrow_mut().take();
        if let Some(timer) = timer {
            timer.abort();
        }
    }

    fn release(&self) {
        self.cancel_timer();
        let in_flight = self.in_flight.borrow_mut().take();
        if let Some(in_flight) = in_flight {
            in_flight.abort();
        }
    }

    fn apply(&self, response: FetchResponse) {
        let id = response.id;
        if self.catalog.borrow_mut().apply(response) {
            self.in_flight.borrow_mut().take();
            self.notify();
        } else {
            debug!("response to request {id} not applied");
        }
    }
}

impl<R: ExerciseRepository + 'static> Inner<R> {
    fn dispatch(self: &Rc<Self>, event: Event) {
        let command = self.catalog.borrow_mut().handle(event, Utc::now());
        self.execute(command);
        self.notify();
    }

    fn execute(self: &Rc<Self>, command: Command) {
        match command {
            Command::None => {}
            Command::Fetch(request) => {
                self.cancel_timer();
                self.fetch(request);
            }
            Command::Schedule(deadline) => self.schedule(deadline),
            Command::Dispose => self.release(),
        }
    }

    fn schedule(self: &Rc<Self>, deadline: DateTime<Utc>) {
        let millis = (deadline - Utc::now()).num_milliseconds().max(0);
        let (timer, handle) = abortable(TimeoutFuture::new(
            u32::try_from(millis).unwrap_or(u32::MAX),
        ));

        let previous = self.timer.borrow_mut().replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }

        let inner = Rc::downgrade(self);
        spawn_local(async move {
            if timer.await.is_ok() {
                if let Some(inner) = Weak::upgrade(&inner) {
                    inner.poll();
                }
            }
        });
    }

    fn poll(self: &Rc<Self>) {
        let request = self.catalog.borrow_mut().poll(Utc::now());
        if let Some(request) = request {
            self.timer.borrow_mut().take();
            self.fetch(request);
            self.notify();
        } else {
            // The browser may wake us marginally before the deadline.
            let deadline = self.catalog.borrow().deadline();
            if let Some(deadline) = deadline {
                self.schedule(deadline);
            }
        }
    }

    fn fetch(self: &Rc<Self>, request: FetchRequest) {
        let FetchRequest { id, query } = request;
        debug!("request {id}: {query}");

        let service = Rc::clone(&self.service);
        let (response, handle) =
            abortable(async move { service.get_exercises(&query).await });

        let previous = self.in_flight.borrow_mut().replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }

        let inner = Rc::downgrade(self);
        spawn_local(async move {
            match response.await {
                Ok(result) => {
                    if let Some(inner) = Weak::upgrade(&inner) {
                        inner.apply(FetchResponse { id, result });
                    }
                }
                Err(Aborted) => debug!("request {id} aborted"),
            }
        });
    }
}
