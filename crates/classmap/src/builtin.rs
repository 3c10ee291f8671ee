// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compiled-in magic number and protocol id tables.
//!
//! These pairs are part of the wire contract: peers running the reference
//! stack resolve the same tags to the same types. Never renumber an entry;
//! append new ones with a fresh tag below [`MAX_MAGIC_VALUE`].
//!
//! [`MAX_MAGIC_VALUE`]: crate::config::MAX_MAGIC_VALUE

use crate::config::{ProtocolId, TypeTag};

/// Built-in message, header and address types, keyed by magic number.
pub const MAGIC_MAP: &[(TypeTag, &str)] = &[
    (1, "org.jgroups.stack.IpAddress"),
    (3, "org.jgroups.protocols.FD$FdHeader"),
    (6, "org.jgroups.protocols.FD_SOCK$FdHeader"),
    (7, "org.jgroups.protocols.FragHeader"),
    (13, "org.jgroups.protocols.PingHeader"),
    (21, "org.jgroups.protocols.UNICAST$UnicastHeader"),
    (22, "org.jgroups.protocols.VERIFY_SUSPECT$VerifyHeader"),
    (24, "org.jgroups.protocols.pbcast.GMS$GmsHeader"),
    (25, "org.jgroups.protocols.pbcast.NakAckHeader"),
    (27, "org.jgroups.protocols.pbcast.STABLE$StableHeader"),
    (28, "org.jgroups.protocols.pbcast.STATE_TRANSFER$StateHeader"),
    (30, "org.jgroups.Message"),
    (31, "org.jgroups.View"),
    (32, "org.jgroups.ViewId"),
    (34, "org.jgroups.Address"),
    (36, "org.jgroups.protocols.PingData"),
    (38, "java.util.Vector"),
    (39, "org.jgroups.protocols.pbcast.JoinRsp"),
    (40, "org.jgroups.util.Digest"),
    (41, "java.util.Hashtable"),
    (53, "org.jgroups.protocols.COMPRESS$CompressHeader"),
    (54, "org.jgroups.protocols.FcHeader"),
    (56, "org.jgroups.protocols.TpHeader"),
    (57, "org.jgroups.protocols.ENCRYPT$EncryptHeader"),
    (58, "org.jgroups.protocols.SEQUENCER$SequencerHeader"),
    (59, "org.jgroups.protocols.FD_SIMPLE$FdHeader"),
    (61, "org.jgroups.protocols.FD_ALL$HeartbeatHeader"),
    (64, "org.jgroups.protocols.pbcast.FLUSH$FlushHeader"),
    (65, "org.jgroups.protocols.pbcast.StreamingStateTransfer$StateHeader"),
    (67, "org.jgroups.protocols.AuthHeader"),
    (68, "org.jgroups.util.UUID"),
    (71, "org.jgroups.blocks.RequestCorrelator$Header"),
    (72, "org.jgroups.blocks.RequestCorrelator$MultiDestinationHeader"),
    (73, "org.jgroups.protocols.UNICAST2$Unicast2Header"),
    (74, "org.jgroups.protocols.SCOPE$ScopeHeader"),
    (75, "org.jgroups.blocks.mux.MuxHeader"),
    (76, "org.jgroups.protocols.DAISYCHAIN$DaisyHeader"),
    (77, "org.jgroups.protocols.RELAY$RelayHeader"),
    (78, "org.jgroups.protocols.STOMP$StompHeader"),
    (80, "org.jgroups.protocols.PrioHeader"),
    (81, "org.jgroups.protocols.Locking$LockingHeader"),
    (82, "org.jgroups.util.PayloadUUID"),
    (83, "org.jgroups.util.AdditionalDataUUID"),
    (84, "org.jgroups.util.TopologyUUID"),
    (85, "org.jgroups.protocols.Executing$ExecutorHeader"),
    (86, "org.jgroups.protocols.Executing$Request"),
    (87, "org.jgroups.blocks.executor.ExecutionService$RunnableAdapter"),
    (88, "org.jgroups.blocks.executor.Executions$StreamableCallable"),
    (89, "org.jgroups.protocols.COUNTER$CounterHeader"),
    (90, "org.jgroups.protocols.MERGE3$MergeHeader"),
    (91, "org.jgroups.protocols.RSVP$RsvpHeader"),
    (93, "org.jgroups.protocols.pbcast.NakAckHeader2"),
    (94, "org.jgroups.util.SeqnoList"),
    (95, "org.jgroups.protocols.tom.ToaHeader"),
    (96, "org.jgroups.AnycastAddress"),
    (97, "org.jgroups.protocols.relay.SiteUUID"),
    (98, "org.jgroups.protocols.relay.SiteMaster"),
    (99, "org.jgroups.protocols.relay.RELAY2$Relay2Header"),
    (100, "org.jgroups.protocols.FORWARD_TO_COORD$ForwardHeader"),
    (101, "org.jgroups.protocols.relay.CanBeSiteMaster"),
    (102, "org.jgroups.protocols.relay.CanBeSiteMasterTopology"),
];

/// Built-in protocol layers, keyed by protocol id.
pub const PROTOCOL_IDS: &[(ProtocolId, &str)] = &[
    (2, "org.jgroups.protocols.FD"),
    (3, "org.jgroups.protocols.FD_SOCK"),
    (4, "org.jgroups.protocols.FRAG"),
    (5, "org.jgroups.protocols.FRAG2"),
    (6, "org.jgroups.protocols.PING"),
    (7, "org.jgroups.protocols.MPING"),
    (8, "org.jgroups.protocols.S3_PING"),
    (9, "org.jgroups.protocols.FILE_PING"),
    (10, "org.jgroups.protocols.TCPPING"),
    (11, "org.jgroups.protocols.TCPGOSSIP"),
    (12, "org.jgroups.protocols.UNICAST"),
    (13, "org.jgroups.protocols.VERIFY_SUSPECT"),
    (14, "org.jgroups.protocols.pbcast.GMS"),
    (15, "org.jgroups.protocols.pbcast.NAKACK"),
    (16, "org.jgroups.protocols.pbcast.STABLE"),
    (17, "org.jgroups.protocols.pbcast.STATE_TRANSFER"),
    (19, "org.jgroups.protocols.COMPRESS"),
    (20, "org.jgroups.protocols.FC"),
    (21, "org.jgroups.protocols.UDP"),
    (22, "org.jgroups.protocols.TCP"),
    (23, "org.jgroups.protocols.TCP_NIO"),
    (24, "org.jgroups.protocols.TUNNEL"),
    (25, "org.jgroups.protocols.ENCRYPT"),
    (26, "org.jgroups.protocols.SEQUENCER"),
    (27, "org.jgroups.protocols.FD_SIMPLE"),
    (28, "org.jgroups.protocols.FD_ICMP"),
    (29, "org.jgroups.protocols.FD_ALL"),
    (31, "org.jgroups.protocols.pbcast.FLUSH"),
    (33, "org.jgroups.protocols.AUTH"),
    (34, "org.jgroups.protocols.pbcast.STATE"),
    (35, "org.jgroups.protocols.pbcast.STATE_SOCK"),
    (36, "org.jgroups.protocols.HTOTAL"),
    (37, "org.jgroups.protocols.DISCARD"),
    (39, "org.jgroups.protocols.SHARED_LOOPBACK"),
    (40, "org.jgroups.protocols.UNICAST2"),
    (41, "org.jgroups.protocols.SCOPE"),
    (42, "org.jgroups.protocols.DAISYCHAIN"),
    (43, "org.jgroups.protocols.RELAY"),
    (44, "org.jgroups.protocols.MFC"),
    (45, "org.jgroups.protocols.UFC"),
    (46, "org.jgroups.protocols.JDBC_PING"),
    (47, "org.jgroups.protocols.STOMP"),
    (48, "org.jgroups.protocols.PRIO"),
    (49, "org.jgroups.protocols.BPING"),
    (50, "org.jgroups.protocols.CENTRAL_LOCK"),
    (51, "org.jgroups.protocols.PEER_LOCK"),
    (52, "org.jgroups.protocols.CENTRAL_EXECUTOR"),
    (53, "org.jgroups.protocols.COUNTER"),
    (54, "org.jgroups.protocols.MERGE3"),
    (55, "org.jgroups.protocols.RSVP"),
    (56, "org.jgroups.protocols.RACKSPACE_PING"),
    (57, "org.jgroups.protocols.pbcast.NAKACK2"),
    (58, "org.jgroups.protocols.tom.TOA"),
    (59, "org.jgroups.protocols.SWIFT_PING"),
    (60, "org.jgroups.protocols.relay.RELAY2"),
    (61, "org.jgroups.protocols.FORWARD_TO_COORD"),
    (200, "org.jgroups.blocks.RequestCorrelator"),
    (201, "org.jgroups.blocks.mux.MuxRequestCorrelator"),
];
