//! The questions the router answers.
//!
//! Each query fetches a fresh set of rail routes, rebuilds the network
//! from scratch and throws it away afterwards.

use tracing::info;

use crate::domain::{Route, RouteType};
use crate::mbta::MbtaError;
use crate::network::{BuildError, RouteProvider, StopProvider, TransitNetwork};
use crate::planner::{PathError, SearchConfig, plan};
use crate::summary::{Interchange, RouteSummary, interchanges, summarize};

/// Error from a top-level query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Listing routes failed
    #[error(transparent)]
    Transport(#[from] MbtaError),

    /// Fetching a route's stops failed
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Route search failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// Upstream returned no rail routes
    #[error("no rail routes found")]
    EmptyNetwork,
}

/// Summary statistics over the rail network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopStatistics {
    pub summary: RouteSummary,
    pub interchanges: Vec<Interchange>,
}

/// Long names of every light and heavy rail route, in upstream order.
pub async fn list_rail_routes<P: RouteProvider>(provider: &P) -> Result<Vec<String>, QueryError> {
    let routes = provider.get_routes(&RouteType::RAIL).await?;
    Ok(routes.into_iter().map(|r| r.long_name).collect())
}

/// Fetch the rail routes and build a network from them.
pub async fn load_network<P>(provider: &P) -> Result<TransitNetwork, QueryError>
where
    P: RouteProvider + StopProvider,
{
    let routes = provider.get_routes(&RouteType::RAIL).await?;
    if routes.is_empty() {
        return Err(QueryError::EmptyNetwork);
    }
    Ok(TransitNetwork::build(provider, &routes).await?)
}

/// Fewest/most stops and interchange stops.
pub async fn stop_statistics<P>(provider: &P) -> Result<StopStatistics, QueryError>
where
    P: RouteProvider + StopProvider,
{
    let network = load_network(provider).await?;
    let summary = summarize(&network).ok_or(QueryError::EmptyNetwork)?;

    Ok(StopStatistics {
        summary,
        interchanges: interchanges(&network),
    })
}

/// Routes to take from the stop named `start_name` to the one named
/// `end_name`.
///
/// Names are matched exactly after trimming surrounding whitespace. An
/// empty result means the two names refer to the same stop.
pub async fn route_between<P>(
    provider: &P,
    start_name: &str,
    end_name: &str,
    config: &SearchConfig,
) -> Result<Vec<Route>, QueryError>
where
    P: RouteProvider + StopProvider,
{
    let (start_name, end_name) = (start_name.trim(), end_name.trim());
    let network = load_network(provider).await?;

    let start = network
        .find_stop_by_name(start_name)
        .ok_or_else(|| PathError::StartStopNotFound(start_name.to_string()))?;
    let end = network
        .find_stop_by_name(end_name)
        .ok_or_else(|| PathError::EndStopNotFound(end_name.to_string()))?;

    let routes = plan(&network, start, end, config)?;
    info!(
        from = %start.name,
        to = %end.name,
        strategy = %config.strategy,
        routes = routes.len(),
        "Planned route"
    );

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stop;
    use crate::mbta::SnapshotClient;
    use crate::planner::SearchStrategy;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock provider recording requested route types and stop lookups.
    #[derive(Default)]
    struct MockProvider {
        routes: Vec<Route>,
        stops: HashMap<String, Vec<Stop>>,
        routes_error: Option<fn() -> MbtaError>,
        stops_error: Option<fn() -> MbtaError>,
        requested_types: Mutex<Vec<Vec<RouteType>>>,
        requested_stops: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn new(data: &[(&str, &str, &str)]) -> Self {
            let mut provider = Self::default();
            for (id, name, stops) in data {
                provider.routes.push(Route::new(*id, *name));
                provider.stops.insert(
                    id.to_string(),
                    stops
                        .split(',')
                        .filter(|s| !s.is_empty())
                        .map(|s| Stop::new(s.to_lowercase().replace(' ', "-"), s))
                        .collect(),
                );
            }
            provider
        }
    }

    impl RouteProvider for MockProvider {
        async fn get_routes(&self, types: &[RouteType]) -> Result<Vec<Route>, MbtaError> {
            self.requested_types.lock().unwrap().push(types.to_vec());
            match self.routes_error {
                Some(err) => Err(err()),
                None => Ok(self.routes.clone()),
            }
        }
    }

    impl StopProvider for MockProvider {
        async fn get_stops(&self, route: &Route) -> Result<Vec<Stop>, MbtaError> {
            self.requested_stops.lock().unwrap().push(route.id.clone());
            match self.stops_error {
                Some(err) => Err(err()),
                None => Ok(self.stops.get(&route.id).cloned().unwrap_or_default()),
            }
        }
    }

    fn sample() -> MockProvider {
        MockProvider::new(&[
            ("Red", "Red Line", "Alewife,Park Street,Downtown Crossing,Ashmont"),
            ("Mattapan", "Mattapan Trolley", "Ashmont,Mattapan"),
            ("Orange", "Orange Line", "Oak Grove,State,Downtown Crossing,Forest Hills"),
            ("Blue", "Blue Line", "Wonderland,State,Bowdoin"),
        ])
    }

    #[tokio::test]
    async fn lists_route_names_for_rail_types() {
        let provider = sample();

        let names = list_rail_routes(&provider).await.unwrap();

        assert_eq!(
            names,
            vec!["Red Line", "Mattapan Trolley", "Orange Line", "Blue Line"]
        );
        assert_eq!(
            *provider.requested_types.lock().unwrap(),
            vec![vec![RouteType::LightRail, RouteType::HeavyRail]]
        );
    }

    #[tokio::test]
    async fn list_propagates_transport_error() {
        let provider = MockProvider {
            routes_error: Some(|| MbtaError::Unauthorized),
            ..Default::default()
        };

        let err = list_rail_routes(&provider).await.unwrap_err();
        assert!(matches!(err, QueryError::Transport(MbtaError::Unauthorized)));
        assert_eq!(err.to_string(), "unauthorized: check MBTA_API_KEY");
    }

    #[tokio::test]
    async fn statistics() {
        let provider = sample();

        let stats = stop_statistics(&provider).await.unwrap();

        assert_eq!(stats.summary.min_route.long_name, "Mattapan Trolley");
        assert_eq!(stats.summary.min_count, 2);
        assert_eq!(stats.summary.max_route.long_name, "Red Line");
        assert_eq!(stats.summary.max_count, 4);

        let connections: Vec<(&str, String)> = stats
            .interchanges
            .iter()
            .map(|i| (i.stop.name.as_str(), i.route_names()))
            .collect();
        assert_eq!(
            connections,
            vec![
                ("Downtown Crossing", "Red Line, Orange Line".to_string()),
                ("Ashmont", "Red Line, Mattapan Trolley".to_string()),
                ("State", "Orange Line, Blue Line".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn statistics_abort_on_stop_lookup_failure() {
        let provider = MockProvider {
            stops_error: Some(|| MbtaError::RateLimited),
            ..sample()
        };

        let err = stop_statistics(&provider).await.unwrap_err();
        match err {
            QueryError::Build(e) => {
                assert_eq!(e.route_id, "Red");
                assert!(matches!(e.source, MbtaError::RateLimited));
            }
            other => panic!("expected build error, got {other:?}"),
        }
        // The first failure stops the build
        assert_eq!(*provider.requested_stops.lock().unwrap(), vec!["Red"]);
    }

    #[tokio::test]
    async fn no_routes_is_an_error() {
        let provider = MockProvider::default();

        assert!(matches!(
            stop_statistics(&provider).await,
            Err(QueryError::EmptyNetwork)
        ));
        assert!(matches!(
            route_between(&provider, "A", "B", &SearchConfig::default()).await,
            Err(QueryError::EmptyNetwork)
        ));
    }

    #[tokio::test]
    async fn routes_between_named_stops() {
        let provider = sample();

        let routes = route_between(&provider, " Alewife ", "Wonderland\n", &SearchConfig::default())
            .await
            .unwrap();

        let names: Vec<&str> = routes.iter().map(|r| r.long_name.as_str()).collect();
        assert_eq!(names, vec!["Red Line", "Orange Line", "Blue Line"]);
    }

    #[tokio::test]
    async fn same_stop_takes_no_routes() {
        let provider = sample();

        let routes = route_between(&provider, "State", "State", &SearchConfig::default())
            .await
            .unwrap();
        assert!(routes.is_empty());
    }

    #[tokio::test]
    async fn unknown_stop_names() {
        let provider = sample();
        let config = SearchConfig::default();

        let err = route_between(&provider, "Nowhere", "State", &config)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            QueryError::Path(PathError::StartStopNotFound(ref name)) if name == "Nowhere"
        ));
        assert_eq!(err.to_string(), "could not find start stop: Nowhere");

        // Matching is case-sensitive
        let err = route_between(&provider, "State", "state", &config)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            QueryError::Path(PathError::EndStopNotFound(ref name)) if name == "state"
        ));
    }

    #[tokio::test]
    async fn unreachable_stop() {
        let provider = MockProvider::new(&[
            ("Red", "Red Line", "Alewife,Park Street"),
            ("Blue", "Blue Line", "Wonderland,Bowdoin"),
        ]);

        let err = route_between(&provider, "Alewife", "Bowdoin", &SearchConfig::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "no connecting routes found from Alewife to Bowdoin"
        );
    }

    #[tokio::test]
    async fn each_query_refetches() {
        let provider = sample();

        stop_statistics(&provider).await.unwrap();
        route_between(&provider, "Alewife", "State", &SearchConfig::default())
            .await
            .unwrap();

        assert_eq!(provider.requested_types.lock().unwrap().len(), 2);
        assert_eq!(provider.requested_stops.lock().unwrap().len(), 8);
    }

    fn sample_snapshot() -> SnapshotClient {
        SnapshotClient::load(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/data/sample_snapshot.json"
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn sample_snapshot_routes() {
        let client = sample_snapshot();

        let names = list_rail_routes(&client).await.unwrap();
        assert_eq!(
            names,
            vec![
                "Red Line",
                "Mattapan Trolley",
                "Orange Line",
                "Green Line B",
                "Blue Line",
            ]
        );
    }

    #[tokio::test]
    async fn sample_snapshot_statistics() {
        let client = sample_snapshot();

        let stats = stop_statistics(&client).await.unwrap();
        assert_eq!(stats.summary.min_route.id, "Mattapan");
        assert_eq!(stats.summary.max_route.id, "Orange");

        let names: Vec<&str> = stats
            .interchanges
            .iter()
            .map(|i| i.stop.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Park Street",
                "Downtown Crossing",
                "Ashmont",
                "State",
                "Government Center",
            ]
        );
    }

    #[tokio::test]
    async fn sample_snapshot_strategies() {
        let client = sample_snapshot();

        let dfs = route_between(&client, "Mattapan", "Wonderland", &SearchConfig::default())
            .await
            .unwrap();
        let dfs: Vec<&str> = dfs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(dfs, vec!["Mattapan", "Red", "Green-B", "Blue"]);

        let config = SearchConfig::default().with_strategy(SearchStrategy::FewestChanges);
        let bfs = route_between(&client, "Mattapan", "Wonderland", &config)
            .await
            .unwrap();
        let bfs: Vec<&str> = bfs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(bfs.len(), 4);
        assert_eq!(bfs.first(), Some(&"Mattapan"));
        assert_eq!(bfs.last(), Some(&"Blue"));
    }

    #[tokio::test]
    async fn network_loads_on_a_spawned_task() {
        let client = sample_snapshot();

        let network = tokio::spawn(async move { load_network(&client).await })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(network.route_count(), 5);
    }
}
