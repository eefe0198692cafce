use ordered_bst::{Error, SymbolTable};
use quickcheck_macros::quickcheck;

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a table and a hashmap.
/// This way we can ensure that after a random smattering of puts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], table: &mut SymbolTable<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                table.put(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                assert_eq!(table.delete(k), map.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut table = SymbolTable::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut table, &mut map);
    table.size() == map.len() && map.keys().all(|key| table.get(key) == map.get(key))
}

#[quickcheck]
fn keys_ascend(ops: Vec<Op<i16, ()>>) -> bool {
    let mut table = SymbolTable::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut table, &mut map);
    let keys = table.keys().collect::<Vec<_>>();
    keys.len() == table.size() && keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut table = SymbolTable::new();
    for x in &xs {
        table.put(*x, *x);
    }

    xs.iter().all(|x| table.get(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut table = SymbolTable::new();
    for x in &xs {
        table.put(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| table.get(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut table = SymbolTable::new();
    for x in &xs {
        table.put(*x, *x);
    }
    for delete in &deletes {
        table.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| table.get(x).is_none())
        && still_present.iter().all(|x| table.get(x).is_some())
}

#[quickcheck]
fn rank_of_select(xs: Vec<i8>) -> bool {
    let table: SymbolTable<_, _> = xs.into_iter().map(|x| (x, ())).collect();

    (0..table.size()).all(|rank| table.select(rank).map(|key| table.rank(key)) == Ok(rank))
        && table.select(table.size())
            == Err(Error::InvalidArgument {
                rank: table.size(),
                size: table.size(),
            })
}

#[quickcheck]
fn floor_at_most_and_ceiling_at_least(xs: Vec<i8>, target: i8) -> bool {
    let table: SymbolTable<_, _> = xs.iter().map(|x| (*x, *x)).collect();

    let floor_ok = match table.floor(&target) {
        Some(floor) => *floor <= target && xs.iter().all(|x| *x <= *floor || *x > target),
        None => xs.iter().all(|x| *x > target),
    };
    let ceiling_ok = match table.ceiling(&target) {
        Some(ceiling) => *ceiling >= target && xs.iter().all(|x| *x >= *ceiling || *x < target),
        None => xs.iter().all(|x| *x < target),
    };
    floor_ok && ceiling_ok
}
