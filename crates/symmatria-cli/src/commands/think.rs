use symmatria_application::ContemplationService;
use symmatria_core::config::ContemplationConfig;
use symmatria_core::contemplation::ReflectionView;
use tokio_util::sync::CancellationToken;

/// Collects the first `count` distinct reflections from the rotation.
pub async fn collect(config: ContemplationConfig, count: usize) -> Vec<ReflectionView> {
    let cancel = CancellationToken::new();
    let mut views = ContemplationService::new(config).start(cancel.clone());
    let mut shown: Vec<ReflectionView> = Vec::with_capacity(count);

    while shown.len() < count {
        let Some(view) = views.recv().await else {
            break;
        };
        let repeated = shown
            .last()
            .is_some_and(|last| (last.structure_id, last.position) == (view.structure_id, view.position));
        if !repeated {
            shown.push(view);
        }
    }
    cancel.cancel();
    shown
}

pub async fn run(config: ContemplationConfig, count: usize) {
    let mut structure = "";
    for view in collect(config, count).await {
        if view.structure_id != structure {
            structure = view.structure_id;
            println!("🌌 {} ({})", view.title, view.description);
        }
        println!("  [{}/{}] {}", view.position, view.total, view.text);
    }
}
