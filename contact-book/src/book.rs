use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::{BookError, Result};

/// A single entry of the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

impl Contact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.name, self.phone, self.email)
    }
}

/// A record in the index together with its link into the sorted sequence.
///
/// Links name the following record instead of pointing at it, so the index
/// stays the only owner.
struct Node {
    contact: Contact,
    sort_key: String,
    next: Option<String>,
}

/// Contacts indexed by name and chained in case-insensitive name order.
///
/// Names are unique by exact comparison, so `"Amy"` and `"amy"` can both be
/// stored. They sort as equals and keep the order they were added in, where
/// `main.py` put a new name ahead of its equals unless they started at the head.
#[derive(Default)]
pub struct ContactBook {
    index: HashMap<String, Node>,
    head: Option<String>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Adds a contact and links it in front of the first contact whose name
    /// sorts strictly after it.
    ///
    /// Fails without touching the book if `name` is taken or any field is
    /// empty.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<&Contact> {
        if self.index.contains_key(name) {
            debug!(contact = name, "rejected duplicate contact");
            return Err(BookError::DuplicateName(name.to_owned()));
        }
        if name.is_empty() || phone.is_empty() || email.is_empty() {
            debug!(contact = name, "rejected contact with empty field");
            return Err(BookError::InvalidInput);
        }

        let sort_key = name.to_lowercase();
        let link = Some(name.to_owned());
        let next = match self.last_not_after(&sort_key) {
            Some(prev) => std::mem::replace(&mut self.node_mut(&prev).next, link),
            None => std::mem::replace(&mut self.head, link),
        };

        let contact = Contact {
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
        };
        self.index.insert(
            name.to_owned(),
            Node {
                contact,
                sort_key,
                next,
            },
        );

        debug!(contact = name, "added contact");
        Ok(&self.node(name).contact)
    }

    /// Looks a contact up by its exact name.
    pub fn search(&self, name: &str) -> Result<&Contact> {
        self.index
            .get(name)
            .map(|node| &node.contact)
            .ok_or_else(|| BookError::NotFound(name.to_owned()))
    }

    /// Removes a contact from the index and unlinks it from the sequence.
    ///
    /// # Panics
    ///
    /// If the contact is indexed but not reachable from the head.
    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        let removed = match self.index.remove(name) {
            Some(node) => node,
            None => {
                debug!(contact = name, "no contact to delete");
                return Err(BookError::NotFound(name.to_owned()));
            }
        };

        if self.head.as_deref() == Some(name) {
            self.head = removed.next;
        } else {
            // The walk stops on the predecessor and never looks up `name`.
            let prev = self
                .nodes()
                .find(|(_, node)| node.next.as_deref() == Some(name))
                .map(|(prev, _)| prev.to_owned())
                .unwrap_or_else(|| panic!("contact `{}` is indexed but not linked", name));
            self.node_mut(&prev).next = removed.next;
        }

        debug!(contact = name, "deleted contact");
        Ok(removed.contact)
    }

    /// Overwrites the phone and/or email of a contact.
    ///
    /// A missing or empty value leaves the field as it is, so a field can
    /// never be cleared.
    pub fn update(
        &mut self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<&Contact> {
        let node = match self.index.get_mut(name) {
            Some(node) => node,
            None => {
                debug!(contact = name, "no contact to update");
                return Err(BookError::NotFound(name.to_owned()));
            }
        };

        if let Some(phone) = phone.filter(|phone| !phone.is_empty()) {
            node.contact.phone = phone.to_owned();
        }
        if let Some(email) = email.filter(|email| !email.is_empty()) {
            node.contact.email = email.to_owned();
        }

        debug!(contact = name, "updated contact");
        Ok(&node.contact)
    }

    /// Walks the contacts in name order, or reports that there are none.
    pub fn display(&self) -> Result<Iter<'_>> {
        if self.head.is_none() {
            return Err(BookError::EmptyCollection);
        }
        Ok(self.iter())
    }

    /// Walks the contacts in name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: self.nodes(),
        }
    }

    fn nodes(&self) -> Nodes<'_> {
        Nodes {
            index: &self.index,
            cursor: self.head.as_deref(),
        }
    }

    /// Name of the last linked contact whose sort key is not greater than
    /// `sort_key`.
    fn last_not_after(&self, sort_key: &str) -> Option<String> {
        self.nodes()
            .take_while(|(_, node)| node.sort_key.as_str() <= sort_key)
            .last()
            .map(|(name, _)| name.to_owned())
    }

    fn node(&self, name: &str) -> &Node {
        lookup(&self.index, name)
    }

    fn node_mut(&mut self, name: &str) -> &mut Node {
        self.index
            .get_mut(name)
            .unwrap_or_else(|| panic!("sorted list links to `{}`, which is not indexed", name))
    }
}

impl fmt::Debug for ContactBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

fn lookup<'a>(index: &'a HashMap<String, Node>, name: &str) -> &'a Node {
    index
        .get(name)
        .unwrap_or_else(|| panic!("sorted list links to `{}`, which is not indexed", name))
}

#[derive(Clone)]
struct Nodes<'a> {
    index: &'a HashMap<String, Node>,
    cursor: Option<&'a str>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (&'a str, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.cursor?;
        let node = lookup(self.index, name);
        self.cursor = node.next.as_deref();
        Some((name, node))
    }
}

/// Iterator over the contacts of a [`ContactBook`] in name order.
#[derive(Clone)]
pub struct Iter<'a> {
    nodes: Nodes<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<&'a Contact> {
        self.nodes.next().map(|(_, node)| &node.contact)
    }
}
