use crate::{
    client::ApiClient,
    data::{
        ApiCollection, Record,
        school::{School, SchoolAttributes},
        student::{Student, StudentAttributes},
    },
    error::RollcallResult,
};
use std::collections::{HashMap, VecDeque};
use uuid::Uuid;

/// Everything one page load holds: the two collections plus the school picked in the selector.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub students: Vec<Student>,
    pub schools: Vec<School>,
    pub selected_school: Option<String>,
}

impl Roster {
    pub async fn load(client: &ApiClient) -> Self {
        let mut roster = Self::default();
        roster.refresh(client).await;
        roster
    }

    /// Fetches both collections concurrently. A failed fetch is logged and
    /// leaves that collection as it was.
    pub async fn refresh(&mut self, client: &ApiClient) {
        let (students, schools) = tokio::join!(
            client.get_all::<StudentAttributes>(),
            client.get_all::<SchoolAttributes>(),
        );

        keep_previous_on_failure(&mut self.students, students);
        keep_previous_on_failure(&mut self.schools, schools);
    }
}

fn keep_previous_on_failure<A: ApiCollection>(
    slot: &mut Vec<Record<A>>,
    fetched: RollcallResult<Vec<Record<A>>>,
) {
    match fetched {
        Ok(records) => {
            debug!(collection = A::PATH, count = records.len(), "Loaded collection");
            *slot = records;
        }
        Err(e) => {
            warn!(?e, collection = A::PATH, "Error fetching collection, keeping previous");
        }
    }
}

/// Rosters for recent page loads, oldest evicted first once `capacity` is reached.
#[derive(Debug)]
pub struct MountRegistry {
    capacity: usize,
    order: VecDeque<Uuid>,
    rosters: HashMap<Uuid, Roster>,
}

impl MountRegistry {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            rosters: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, id: Uuid, roster: Roster) {
        while self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                debug!(?oldest, "Evicting mount");
                self.rosters.remove(&oldest);
            }
        }

        self.order.push_back(id);
        self.rosters.insert(id, roster);
    }

    pub fn get(&self, id: &Uuid) -> Option<&Roster> {
        self.rosters.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Roster> {
        self.rosters.get_mut(id)
    }

    pub fn mount_count(&self) -> usize {
        self.rosters.len()
    }
}
