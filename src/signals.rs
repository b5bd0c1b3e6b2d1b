use std::{
    any::Any,
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct EffectId(u64);

static NEXT_EFFECT_ID: AtomicU64 = AtomicU64::new(0);
impl EffectId {
    fn new() -> Self {
        Self(NEXT_EFFECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

thread_local! {
    static SUBSCRIBER_STACK: RefCell<Vec<EffectId>> = RefCell::new(Vec::new());
    static EFFECTS: RefCell<HashMap<EffectId, Rc<dyn Fn()>>> = RefCell::new(HashMap::new());
}

struct SignalInner<T> {
    value: T,
    subscribers: HashSet<EffectId>,
}

#[derive(Clone)]
pub struct ReadSignal<T: 'static> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

#[derive(Clone)]
pub struct WriteSignal<T: 'static> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

pub fn create_signal<T: Any + Clone>(value: T) -> (ReadSignal<T>, WriteSignal<T>) {
    let inner = Rc::new(RefCell::new(SignalInner {
        value,
        subscribers: HashSet::new(),
    }));

    (
        ReadSignal {
            inner: inner.clone(),
        },
        WriteSignal { inner },
    )
}

impl<T: Clone> ReadSignal<T> {
    pub fn get(&self) -> T {
        SUBSCRIBER_STACK.with(|stack| {
            if let Some(effect_id) = stack.borrow().last() {
                self.inner.borrow_mut().subscribers.insert(*effect_id);
            }
        });
        self.inner.borrow().value.clone()
    }
}

impl<T: 'static> WriteSignal<T> {
    fn notify_subscribers(&self) {
        let subscribers = self.inner.borrow().subscribers.clone();
        for effect_id in subscribers {
            EFFECTS.with(|effects| {
                let runner = effects.borrow().get(&effect_id).cloned();
                if let Some(runner) = runner {
                    runner();
                }
            });
        }
    }

    pub fn set(&self, new_value: T) {
        self.inner.borrow_mut().value = new_value;
        self.notify_subscribers();
    }

    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.inner.borrow_mut().value);
        self.notify_subscribers();
    }
}

pub type Memo<T> = ReadSignal<T>;

pub fn create_memo<T, F>(derive_fn: F) -> Memo<T>
where
    T: Any + Clone + 'static,
    F: Fn() -> T + 'static,
{
    let (read_memo, write_memo) = create_signal(derive_fn());

    create_effect(move || {
        let new_value = derive_fn();
        write_memo.set(new_value);
    });

    read_memo
}

pub fn create_effect<F>(effect_fn: F)
where
    F: Fn() + 'static,
{
    let id = EffectId::new();
    let effect_fn_rc = Rc::new(effect_fn);

    let runner: Rc<dyn Fn()> = Rc::new({
        let effect_fn_rc = effect_fn_rc.clone();
        move || {
            SUBSCRIBER_STACK.with(|stack| {
                stack.borrow_mut().push(id);
            });

            (effect_fn_rc)();

            SUBSCRIBER_STACK.with(|stack| {
                stack.borrow_mut().pop();
            });
        }
    });

    EFFECTS.with(|effects| {
        effects.borrow_mut().insert(id, runner.clone());
    });

    runner();
}
