use indexmap::IndexSet;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// 參與者下限，少於三人無法排出有意義的交換
pub const MIN_PARTICIPANTS: usize = 3;

/// 依輸入順序保存、已去除重複的參與者名單
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participants {
    names: IndexSet<String>,
}

impl Participants {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

/// giver -> 不可抽到的 giftee 集合。兩個來源以聯集合併。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusions<T: Eq + Hash> {
    by_giver: HashMap<T, HashSet<T>>,
}

impl<T: Eq + Hash> Default for Exclusions<T> {
    fn default() -> Self {
        Self {
            by_giver: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash> Exclusions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增一組排除配對；已存在時回傳 false
    pub fn insert(&mut self, giver: T, giftee: T) -> bool {
        self.by_giver.entry(giver).or_default().insert(giftee)
    }

    pub fn is_excluded<Q>(&self, giver: &Q, giftee: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_giver
            .get(giver)
            .is_some_and(|giftees| giftees.contains(giftee))
    }

    pub fn merge(&mut self, other: Exclusions<T>) {
        for (giver, giftees) in other.by_giver {
            self.by_giver.entry(giver).or_default().extend(giftees);
        }
    }

    /// 排除配對總數
    pub fn len(&self) -> usize {
        self.by_giver.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Eq + Hash> FromIterator<(T, T)> for Exclusions<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut exclusions = Self::new();
        for (giver, giftee) in iter {
            exclusions.insert(giver, giftee);
        }
        exclusions
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing<T> {
    pub giver: T,
    pub giftee: T,
}

impl<T: fmt::Display> fmt::Display for Pairing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} buys for {}", self.giver, self.giftee)
    }
}

/// 完整分配結果，依 giver 的輸入順序排列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment<T> {
    pairs: Vec<Pairing<T>>,
}

impl<T> Assignment<T> {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(giver, giftee)| Pairing { giver, giftee })
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pairing<T>> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn giftee_of<Q>(&self, giver: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs
            .iter()
            .find(|pairing| pairing.giver.borrow() == giver)
            .map(|pairing| &pairing.giftee)
    }
}

impl<'a, T> IntoIterator for &'a Assignment<T> {
    type Item = &'a Pairing<T>;
    type IntoIter = std::slice::Iter<'a, Pairing<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
