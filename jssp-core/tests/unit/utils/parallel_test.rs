use super::*;

#[test]
fn can_into_collect_keeping_order() {
    let source = (0..100).map(|idx| idx.to_string()).collect::<Vec<_>>();

    let result = parallel_into_collect(source, |item| item.parse::<usize>().unwrap());

    assert_eq!(result, (0..100).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2).unwrap();

    let result = pool.execute(|| rayon::current_num_threads());

    assert_eq!(result, 2);
}

#[test]
fn can_get_cpus() {
    assert!(get_cpus() > 0);
}
