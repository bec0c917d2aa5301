use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::time::Duration;
use sigil::{Declaration, Enumeration, EnumerationError, Registry};

const THREADS: usize = 16;

struct Crowd(usize);
static CROWD_DECLARES: AtomicUsize = AtomicUsize::new(0);
impl Enumeration for Crowd
{
    fn registry() -> &'static Registry<Self>
    {
        static REGISTRY: Registry<Crowd> = Registry::new();
        &REGISTRY
    }

    fn declare(declaration: &mut Declaration<Self>)
    {
        CROWD_DECLARES.fetch_add(1, Ordering::SeqCst);
        for name in ["first", "second", "third", "fourth"]
        {
            declaration.member_with(name, Crowd);
        }
    }
}

#[test]
fn concurrent_first_use_builds_once()
{
    crate::init_logging();
    let barrier = Barrier::new(THREADS);

    let seen: Vec<Vec<usize>> = std::thread::scope(|scope|
    {
        let handles: Vec<_> = (0..THREADS).map(|_| scope.spawn(||
        {
            barrier.wait();
            Crowd::initialize().unwrap();
            Crowd::values().unwrap().values()
                .map(|member| member as *const _ as usize)
                .collect::<Vec<_>>()
        })).collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(1, CROWD_DECLARES.load(Ordering::SeqCst));
    assert!(seen.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(4, seen[0].len());
    assert_eq!(3, Crowd::value_of("fourth").unwrap().0);
}

struct Sluggish;
impl Enumeration for Sluggish
{
    fn registry() -> &'static Registry<Self>
    {
        static REGISTRY: Registry<Sluggish> = Registry::new();
        &REGISTRY
    }

    fn declare(declaration: &mut Declaration<Self>)
    {
        declaration.member("one", Sluggish);
        std::thread::sleep(Duration::from_millis(20));
        declaration.member("two", Sluggish);
        std::thread::sleep(Duration::from_millis(20));
        declaration.member("three", Sluggish);
    }
}

#[test]
fn readers_never_see_a_partial_set()
{
    std::thread::scope(|scope|
    {
        let reader = scope.spawn(||
        {
            loop
            {
                match Sluggish::values()
                {
                    Ok(values) => return values.len(),
                    Err(err) =>
                    {
                        assert_eq!(EnumerationError::NotInitialized { enumeration: "Sluggish" }, err);
                        std::thread::yield_now();
                    }
                }
            }
        });

        Sluggish::initialize().unwrap();
        assert_eq!(3, reader.join().unwrap());
    });
}
